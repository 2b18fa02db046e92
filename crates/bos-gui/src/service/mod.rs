//! Background services driven through `Task::perform`.

pub mod optimizer;
