pub mod line;
pub mod pie;

/// Fill palette shared by the charts, applied round-robin per series.
pub const CHART_COLORS: [&str; 8] = [
    "#8884d8", "#82ca9d", "#ffc658", "#ff8042", "#8dd1e1", "#a4de6c", "#d0ed57", "#ffc0cb",
];
