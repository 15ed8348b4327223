pub mod item_movement;
pub mod sales_graph;
