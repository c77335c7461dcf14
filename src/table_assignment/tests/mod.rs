//! Unit tests for table recommendation and assignment.
