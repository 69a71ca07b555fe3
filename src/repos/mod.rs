/*
 * Responsibility
 * - storage modules (in-memory for now)
 */
pub mod post_repo;
