use moka::future::Cache;
use once_cell::sync::Lazy;
use sha2::{Digest, Sha256};
use std::env;
use std::time::Duration;

use crate::model::course::Course;

fn ttl_secs() -> u64 {
    env::var("COURSE_CACHE_TTL_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(30)
}

/// Course detail lookups keyed by token digest + course id. Short TTL:
/// course info barely changes within a page visit, but the token decides
/// what the upstream is willing to return, so it is part of the key.
pub static COURSE_CACHE: Lazy<Cache<String, Course>> = Lazy::new(|| {
    Cache::builder()
        .max_capacity(10_000)
        .time_to_live(Duration::from_secs(ttl_secs()))
        .build()
});

// Tokens never land in the cache in the clear.
fn cache_key(token: &str, course_id: u64) -> String {
    let digest = Sha256::digest(token.as_bytes());
    format!("{digest:x}:{course_id}")
}

pub async fn get(token: &str, course_id: u64) -> Option<Course> {
    COURSE_CACHE.get(&cache_key(token, course_id)).await
}

pub async fn store(token: &str, course: &Course) {
    COURSE_CACHE
        .insert(cache_key(token, course.id), course.clone())
        .await;
}
