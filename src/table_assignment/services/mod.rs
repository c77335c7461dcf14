//! Application services for table recommendation and assignment.

mod assignment;
mod recommendation;

pub use assignment::{Assignment, AssignmentError, AssignmentResult, TableAssignmentService};
pub use recommendation::{
    RecommendTableRequest, RecommendationError, RecommendationResult, TableRecommendationService,
};
