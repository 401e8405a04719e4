// ABOUTME: Library entry point for gramlens, an Instagram post engagement lookup.
// ABOUTME: Re-exports the public API: Client, ClientBuilder, PostReport, error taxonomy, documents.

//! gramlens - engagement metadata lookup for public Instagram posts and reels.
//!
//! Given a post URL, this crate fetches the public page and reconciles the
//! structured-data blocks, meta tags, visible timestamp, and title/description
//! heuristics into one normalized record: upload time (KST), likes, comments,
//! views, caption, author, and cover image.
//!
//! # Example
//!
//! ```no_run
//! use gramlens::Client;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = Client::builder().build();
//!     let report = client.lookup("https://www.instagram.com/p/ABC123/").await;
//!     println!("{}", serde_json::to_string_pretty(&report).unwrap());
//! }
//! ```

pub mod client;
pub mod document;
pub mod error;
pub mod extract;
pub mod identity;
pub mod normalize;
pub mod options;
pub mod result;
pub mod source;

pub use crate::client::{classify_status, extract_post, Client};
pub use crate::document::{DomSnapshot, PostDocument};
pub use crate::error::{ErrorKind, ScrapeError};
pub use crate::identity::{validate, PostIdentity, PostType};
pub use crate::options::{ClientBuilder, Options};
pub use crate::result::PostReport;
