//! Business logic services
//!
//! Services hold the orchestration logic between HTTP handlers and the
//! external collaborators (judge, generative providers, identity provider,
//! document store).

pub mod account_service;
pub mod assistant_service;
pub mod execution_service;
pub mod note_service;
pub mod problem_service;

pub use account_service::AccountService;
pub use assistant_service::AssistantService;
pub use execution_service::ExecutionService;
pub use note_service::NoteService;
pub use problem_service::ProblemService;
