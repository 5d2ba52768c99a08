pub mod momentum;
pub mod weekly;
