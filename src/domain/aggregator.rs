//! Summary statistics over a list of blog records.
//!
//! Every function here is total: an empty slice yields `0` or `None`, never an
//! error. Inputs are borrowed and never modified, so the functions are safe to
//! call from any number of request handlers at once.
//!
//! # Tie-breaking
//!
//! All "best of" operations scan left to right and replace the current leader
//! only when a later candidate is strictly greater. For [`most_blogs`] and
//! [`most_likes`] the scan runs over the per-author tally, which keeps authors
//! in the order they first appear in the input.

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};
use std::collections::HashMap;

use crate::domain::entities::Blog;

/// Blog metadata consumed by the aggregation functions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlogRecord {
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: u64,
}

impl BlogRecord {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        url: impl Into<String>,
        likes: u64,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            url: url.into(),
            likes,
        }
    }
}

impl From<&Blog> for BlogRecord {
    fn from(blog: &Blog) -> Self {
        Self {
            title: blog.title.clone(),
            author: blog.author.clone(),
            url: blog.url.clone(),
            // Storage enforces `likes >= 0`.
            likes: u64::try_from(blog.likes).unwrap_or(0),
        }
    }
}

/// A single author together with an aggregated value (post count or likes).
///
/// Serializes as a one-entry JSON object: `{"Edsger W. Dijkstra": 5}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorTally {
    pub author: String,
    pub value: u64,
}

impl Serialize for AuthorTally {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.author, &self.value)?;
        map.end()
    }
}

/// Always returns `1`. Used to check that callers are wired up correctly.
pub fn dummy(_records: &[BlogRecord]) -> u64 {
    1
}

/// Sum of likes over all records. `0` for an empty slice.
pub fn total_likes(records: &[BlogRecord]) -> u64 {
    records
        .iter()
        .fold(0u64, |sum, record| sum.saturating_add(record.likes))
}

/// The record with the most likes, or `None` for an empty slice.
///
/// On ties the earliest record wins.
pub fn favorite_blog(records: &[BlogRecord]) -> Option<&BlogRecord> {
    records
        .iter()
        .fold(None, |favorite: Option<&BlogRecord>, record| match favorite {
            Some(best) if record.likes <= best.likes => Some(best),
            _ => Some(record),
        })
}

/// The author with the most records, as `{author: count}`.
pub fn most_blogs(records: &[BlogRecord]) -> Option<AuthorTally> {
    leader(tally_by_author(records, |_| 1))
}

/// The author with the highest like total, as `{author: likes}`.
pub fn most_likes(records: &[BlogRecord]) -> Option<AuthorTally> {
    leader(tally_by_author(records, |record| record.likes))
}

/// Folds records into `(author, value)` pairs in first-appearance order.
///
/// Authors are grouped by exact string equality.
fn tally_by_author<F>(records: &[BlogRecord], weight: F) -> Vec<(&str, u64)>
where
    F: Fn(&BlogRecord) -> u64,
{
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut tally: Vec<(&str, u64)> = Vec::new();

    for record in records {
        let author = record.author.as_str();
        match slots.get(author) {
            Some(&slot) => {
                let (_, value) = &mut tally[slot];
                *value = value.saturating_add(weight(record));
            }
            None => {
                slots.insert(author, tally.len());
                tally.push((author, weight(record)));
            }
        }
    }

    tally
}

/// Picks the first entry whose value no later entry strictly exceeds.
fn leader(tally: Vec<(&str, u64)>) -> Option<AuthorTally> {
    tally
        .into_iter()
        .fold(None, |best: Option<(&str, u64)>, (author, value)| match best {
            Some((_, best_value)) if value <= best_value => best,
            _ => Some((author, value)),
        })
        .map(|(author, value)| AuthorTally {
            author: author.to_string(),
            value,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn blog_list() -> Vec<BlogRecord> {
        vec![
            BlogRecord::new(
                "Go To Statement Considered Harmful",
                "Edsger W. Dijkstra",
                "http://www.u.arizona.edu/~rubinson/copyright_violations/Go_To_Considered_Harmful.html",
                5,
            ),
            BlogRecord::new("Titteli", "Huukkel von Kuukkel", "http://www.html", 3),
            BlogRecord::new("Titteli2", "Huukkel von Kuukkel JR.", "http://www2.html", 105),
            BlogRecord::new("Titteli3", "Huukkel von Kuukkel", "http://www2.html", 103),
        ]
    }

    #[test]
    fn test_dummy_returns_one() {
        assert_eq!(dummy(&[]), 1);
        assert_eq!(dummy(&blog_list()), 1);
    }

    #[test]
    fn test_total_likes_empty_is_zero() {
        assert_eq!(total_likes(&[]), 0);
    }

    #[test]
    fn test_total_likes_single_blog() {
        let blogs = blog_list();
        assert_eq!(total_likes(&blogs[..1]), 5);
    }

    #[test]
    fn test_total_likes_full_list() {
        assert_eq!(total_likes(&blog_list()), 216);
    }

    #[test]
    fn test_total_likes_saturates() {
        let blogs = vec![
            BlogRecord::new("a", "x", "u", u64::MAX),
            BlogRecord::new("b", "x", "u", 1),
        ];
        assert_eq!(total_likes(&blogs), u64::MAX);
    }

    #[test]
    fn test_favorite_blog_empty_is_none() {
        assert!(favorite_blog(&[]).is_none());
    }

    #[test]
    fn test_favorite_blog_single_blog() {
        let blogs = blog_list();
        assert_eq!(favorite_blog(&blogs[..1]), Some(&blogs[0]));
    }

    #[test]
    fn test_favorite_blog_full_list() {
        let blogs = blog_list();
        let favorite = favorite_blog(&blogs).unwrap();

        assert_eq!(favorite, &blogs[2]);
        assert!(blogs.iter().all(|b| favorite.likes >= b.likes));
    }

    #[test]
    fn test_favorite_blog_tie_keeps_first() {
        let blogs = vec![
            BlogRecord::new("first", "a", "u1", 7),
            BlogRecord::new("second", "b", "u2", 7),
        ];
        assert_eq!(favorite_blog(&blogs).unwrap().title, "first");
    }

    #[test]
    fn test_most_blogs_empty_is_none() {
        assert!(most_blogs(&[]).is_none());
    }

    #[test]
    fn test_most_blogs_single_blog() {
        let blogs = blog_list();
        let result = most_blogs(&blogs[..1]).unwrap();
        assert_eq!(result.author, "Edsger W. Dijkstra");
        assert_eq!(result.value, 1);
    }

    #[test]
    fn test_most_blogs_full_list() {
        let blogs = blog_list();
        let result = most_blogs(&blogs).unwrap();

        assert_eq!(result.author, "Huukkel von Kuukkel");
        assert_eq!(result.value, 2);

        let own = blogs.iter().filter(|b| b.author == result.author).count() as u64;
        assert_eq!(own, result.value);
    }

    #[test]
    fn test_most_blogs_groups_by_exact_author() {
        let blogs = vec![
            BlogRecord::new("a", "Ada", "u", 0),
            BlogRecord::new("b", "ada", "u", 0),
            BlogRecord::new("c", "Ada ", "u", 0),
        ];
        let result = most_blogs(&blogs).unwrap();
        assert_eq!(result.author, "Ada");
        assert_eq!(result.value, 1);
    }

    #[test]
    fn test_most_blogs_tie_keeps_first_seen_author() {
        let blogs = vec![
            BlogRecord::new("a", "Grace", "u", 0),
            BlogRecord::new("b", "Alan", "u", 0),
            BlogRecord::new("c", "Alan", "u", 0),
            BlogRecord::new("d", "Grace", "u", 0),
        ];
        let result = most_blogs(&blogs).unwrap();
        assert_eq!(result.author, "Grace");
        assert_eq!(result.value, 2);
    }

    #[test]
    fn test_most_likes_empty_is_none() {
        assert!(most_likes(&[]).is_none());
    }

    #[test]
    fn test_most_likes_single_blog() {
        let blogs = blog_list();
        let result = most_likes(&blogs[..1]).unwrap();
        assert_eq!(result.author, "Edsger W. Dijkstra");
        assert_eq!(result.value, 5);
    }

    #[test]
    fn test_most_likes_full_list() {
        let blogs = blog_list();
        let result = most_likes(&blogs).unwrap();

        assert_eq!(result.author, "Huukkel von Kuukkel");
        assert_eq!(result.value, 106);

        let own: u64 = blogs
            .iter()
            .filter(|b| b.author == result.author)
            .map(|b| b.likes)
            .sum();
        assert_eq!(own, result.value);
    }

    #[test]
    fn test_most_likes_tie_keeps_first_seen_author() {
        let blogs = vec![
            BlogRecord::new("a", "Barbara", "u", 4),
            BlogRecord::new("b", "Edsger", "u", 10),
            BlogRecord::new("c", "Barbara", "u", 6),
        ];
        let result = most_likes(&blogs).unwrap();
        assert_eq!(result.author, "Barbara");
        assert_eq!(result.value, 10);
    }

    #[test]
    fn test_aggregations_are_idempotent() {
        let blogs = blog_list();

        assert_eq!(total_likes(&blogs), total_likes(&blogs));
        assert_eq!(favorite_blog(&blogs), favorite_blog(&blogs));
        assert_eq!(most_blogs(&blogs), most_blogs(&blogs));
        assert_eq!(most_likes(&blogs), most_likes(&blogs));
        assert_eq!(blogs, blog_list());
    }

    #[test]
    fn test_author_tally_serializes_as_single_entry_map() {
        let tally = AuthorTally {
            author: "Huukkel von Kuukkel".to_string(),
            value: 2,
        };
        assert_eq!(
            serde_json::to_value(&tally).unwrap(),
            json!({ "Huukkel von Kuukkel": 2 })
        );
    }
}
