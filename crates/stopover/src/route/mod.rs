pub mod estimates;
pub mod materializer;
pub mod route_result;
