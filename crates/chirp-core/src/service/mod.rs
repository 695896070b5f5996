//! Services - the read-modify-write logic over the backing collections.
//!
//! Each service owns exactly one collection and serializes access to it with
//! an async mutex spanning the whole load-act-save sequence. Two in-process
//! callers can therefore not interleave a load with another caller's save and
//! lose an update. Nothing synchronizes against other processes touching the
//! same file.

mod post;

mod user;

pub use post::PostService;
pub use user::{LoginOutcome, UserService};
