/*
 * Responsibility
 * - router-level middleware (each module exposes apply(router, ...))
 */
pub mod cors;
pub mod http;
pub mod security_headers;
