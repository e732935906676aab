pub use super::answer::Entity as Answer;
pub use super::question::Entity as Question;
