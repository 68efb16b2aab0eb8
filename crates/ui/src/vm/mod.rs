mod directory_vm;
mod join_vm;
mod quiz_vm;
mod result_vm;
mod time_fmt;

pub use directory_vm::{SessionRowVm, map_session_rows};
pub use join_vm::{JoinVm, map_join_error};
pub use quiz_vm::{QuizStep, QuizVm};
pub use result_vm::{ResultVm, map_result_query};
