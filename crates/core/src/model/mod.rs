mod ids;
pub mod phone;
pub mod question;
pub mod result;
mod session;

pub use ids::{ParseIdError, QuestionId, SessionId, TraineeId};
pub use phone::{PhoneNumber, PhoneNumberError};
pub use question::{Question, QuestionError};
pub use result::{PASS_MARK, QuizOutcome, Score, ScoreBand};
pub use session::{Session, Trainee};
