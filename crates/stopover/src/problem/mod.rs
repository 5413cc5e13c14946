pub mod distance_matrix;
pub mod stop;
