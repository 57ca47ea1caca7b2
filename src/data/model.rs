use serde::Serialize;

// ---------------------------------------------------------------------------
// DataPoint – one parsed CSV row
// ---------------------------------------------------------------------------

/// A single (x, y) sample taken from the first two columns of a CSV row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    pub fn new(x: f64, y: f64) -> Self {
        DataPoint { x, y }
    }
}

// ---------------------------------------------------------------------------
// ScatterPlot – the response envelope
// ---------------------------------------------------------------------------

pub const PLOT_TITLE: &str = "Scatter Plot";
pub const X_LABEL: &str = "X";
pub const Y_LABEL: &str = "Y";

/// Title, axis labels and the ordered point series of one dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPlot {
    pub title: String,
    pub xlabel: String,
    pub ylabel: String,
    pub data_points: Vec<DataPoint>,
}

impl ScatterPlot {
    /// Wrap `points` with the fixed title and axis labels. Point order is kept.
    pub fn assemble(points: Vec<DataPoint>) -> Self {
        ScatterPlot {
            title: PLOT_TITLE.to_string(),
            xlabel: X_LABEL.to_string(),
            ylabel: Y_LABEL.to_string(),
            data_points: points,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn assemble_uses_fixed_labels_and_keeps_order() {
        let plot = ScatterPlot::assemble(vec![DataPoint::new(3.0, 4.5), DataPoint::new(1.0, 2.0)]);
        assert_eq!(plot.title, "Scatter Plot");
        assert_eq!(plot.xlabel, "X");
        assert_eq!(plot.ylabel, "Y");
        assert_eq!(plot.data_points[0], DataPoint::new(3.0, 4.5));
        assert_eq!(plot.data_points[1], DataPoint::new(1.0, 2.0));
    }

    #[test]
    fn serializes_to_wire_shape() {
        let plot = ScatterPlot::assemble(vec![DataPoint::new(1.0, 2.0)]);
        let value = serde_json::to_value(&plot).unwrap();
        assert_eq!(
            value,
            json!({
                "title": "Scatter Plot",
                "xlabel": "X",
                "ylabel": "Y",
                "data_points": [{ "x": 1.0, "y": 2.0 }]
            })
        );
    }

    #[test]
    fn empty_series_serializes_as_empty_array() {
        let plot = ScatterPlot::assemble(Vec::new());
        assert!(plot.data_points.is_empty());
        let value = serde_json::to_value(&plot).unwrap();
        assert_eq!(value["data_points"], json!([]));
    }
}
