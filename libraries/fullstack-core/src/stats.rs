//! Aggregate statistics over a blog collection
//!
//! Every function borrows the collection and walks it once. Ties are
//! always resolved in favour of whatever appears first in the input:
//! the first blog for [`favorite_blog`], the first author to be seen for
//! [`most_blogs`] and [`most_likes`].

use crate::{
    error::{CoreError, Result},
    types::Blog,
};
use serde::Serialize;
use std::collections::HashMap;

/// Public projection of the most liked blog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FavoriteBlog {
    /// Blog title
    pub title: String,
    /// Blog author
    pub author: String,
    /// Like count
    pub likes: u64,
}

/// Author with the highest number of blogs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorBlogs {
    /// Author name
    pub author: String,
    /// Number of blogs by this author
    pub count: u64,
}

/// Author with the highest like total
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorLikes {
    /// Author name
    pub author: String,
    /// Likes summed over the author's blogs
    pub likes: u64,
}

/// All statistics at once; the optional parts are `None` for an empty collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlogSummary {
    /// See [`total_likes`]
    pub total_likes: u64,
    /// See [`favorite_blog`]
    pub favorite: Option<FavoriteBlog>,
    /// See [`most_blogs`]
    pub most_blogs: Option<AuthorBlogs>,
    /// See [`most_likes`]
    pub most_likes: Option<AuthorLikes>,
}

/// Sum of likes across all blogs
pub fn total_likes(blogs: &[Blog]) -> u64 {
    blogs
        .iter()
        .fold(0, |total, blog| total.saturating_add(blog.likes))
}

/// The blog with the most likes
pub fn favorite_blog(blogs: &[Blog]) -> Result<FavoriteBlog> {
    let mut iter = blogs.iter();
    let first = iter.next().ok_or(CoreError::EmptyInput)?;

    let best = iter.fold(first, |best, blog| {
        if blog.likes > best.likes {
            blog
        } else {
            best
        }
    });

    Ok(FavoriteBlog {
        title: best.title.clone(),
        author: best.author.clone(),
        likes: best.likes,
    })
}

/// The author who wrote the most blogs
pub fn most_blogs(blogs: &[Blog]) -> Result<AuthorBlogs> {
    let (author, count) = leader(tally_by_author(blogs, |_| 1))?;
    Ok(AuthorBlogs {
        author: author.to_string(),
        count,
    })
}

/// The author whose blogs have the most likes combined
pub fn most_likes(blogs: &[Blog]) -> Result<AuthorLikes> {
    let (author, likes) = leader(tally_by_author(blogs, |blog| blog.likes))?;
    Ok(AuthorLikes {
        author: author.to_string(),
        likes,
    })
}

/// Compute every statistic in one call
pub fn summarize(blogs: &[Blog]) -> BlogSummary {
    BlogSummary {
        total_likes: total_likes(blogs),
        favorite: favorite_blog(blogs).ok(),
        most_blogs: most_blogs(blogs).ok(),
        most_likes: most_likes(blogs).ok(),
    }
}

/// Per-author totals, in the order authors first appear
fn tally_by_author<F>(blogs: &[Blog], weight: F) -> Vec<(&str, u64)>
where
    F: Fn(&Blog) -> u64,
{
    let mut totals: Vec<(&str, u64)> = Vec::new();
    let mut slots: HashMap<&str, usize> = HashMap::new();

    for blog in blogs {
        let author = blog.author.as_str();
        match slots.get(author) {
            Some(&slot) => {
                if let Some(entry) = totals.get_mut(slot) {
                    entry.1 = entry.1.saturating_add(weight(blog));
                }
            }
            None => {
                slots.insert(author, totals.len());
                totals.push((author, weight(blog)));
            }
        }
    }

    totals
}

/// Highest total; an equal total never displaces an earlier group
fn leader(totals: Vec<(&str, u64)>) -> Result<(&str, u64)> {
    totals
        .into_iter()
        .reduce(|best, next| if next.1 > best.1 { next } else { best })
        .ok_or(CoreError::EmptyInput)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        storage::Document,
        types::{BlogId, CreateBlog, UserId},
    };
    use chrono::Utc;

    fn blog(title: &str, author: &str, likes: u64) -> Blog {
        let draft = CreateBlog::new(title, author, format!("https://{}.example", title), UserId::generate())
            .with_likes(likes);
        Blog::from_draft(BlogId::generate(), draft, Utc::now())
    }

    fn scenario() -> Vec<Blog> {
        vec![blog("a1", "A", 5), blog("b1", "B", 10), blog("a2", "A", 3)]
    }

    fn fixture() -> Vec<Blog> {
        vec![
            blog("React patterns", "Michael Chan", 7),
            blog("Go To Statement Considered Harmful", "Edsger W. Dijkstra", 5),
            blog("Canonical string reduction", "Edsger W. Dijkstra", 12),
            blog("First class tests", "Robert C. Martin", 10),
            blog("TDD harms architecture", "Robert C. Martin", 0),
            blog("Type wars", "Robert C. Martin", 2),
        ]
    }

    #[test]
    fn total_likes_of_empty_list_is_zero() {
        assert_eq!(total_likes(&[]), 0);
    }

    #[test]
    fn total_likes_of_single_blog_equals_its_likes() {
        assert_eq!(total_likes(&[blog("only", "A", 5)]), 5);
    }

    #[test]
    fn scenario_statistics() {
        let blogs = scenario();

        assert_eq!(total_likes(&blogs), 18);
        assert_eq!(
            favorite_blog(&blogs).unwrap(),
            FavoriteBlog {
                title: "b1".to_string(),
                author: "B".to_string(),
                likes: 10
            }
        );
        assert_eq!(
            most_blogs(&blogs).unwrap(),
            AuthorBlogs {
                author: "A".to_string(),
                count: 2
            }
        );
        // A sums to 8, B to 10
        assert_eq!(
            most_likes(&blogs).unwrap(),
            AuthorLikes {
                author: "B".to_string(),
                likes: 10
            }
        );
    }

    #[test]
    fn fixture_matches_manual_tally() {
        let blogs = fixture();

        assert_eq!(total_likes(&blogs), 36);
        assert_eq!(favorite_blog(&blogs).unwrap().title, "Canonical string reduction");
        assert_eq!(
            most_blogs(&blogs).unwrap(),
            AuthorBlogs {
                author: "Robert C. Martin".to_string(),
                count: 3
            }
        );
        assert_eq!(
            most_likes(&blogs).unwrap(),
            AuthorLikes {
                author: "Edsger W. Dijkstra".to_string(),
                likes: 17
            }
        );
    }

    #[test]
    fn favorite_tie_goes_to_first_blog() {
        let blogs = vec![blog("low", "A", 1), blog("first", "B", 9), blog("second", "C", 9)];
        assert_eq!(favorite_blog(&blogs).unwrap().title, "first");
    }

    #[test]
    fn author_ties_go_to_first_seen_author() {
        let blogs = vec![
            blog("b1", "B", 4),
            blog("a1", "A", 1),
            blog("a2", "A", 3),
            blog("b2", "B", 0),
        ];

        assert_eq!(most_blogs(&blogs).unwrap().author, "B");
        assert_eq!(most_likes(&blogs).unwrap().author, "B");
    }

    #[test]
    fn all_zero_likes_still_picks_first_author() {
        let blogs = vec![blog("x", "X", 0), blog("y", "Y", 0)];
        assert_eq!(most_likes(&blogs).unwrap(), AuthorLikes { author: "X".to_string(), likes: 0 });
        assert_eq!(favorite_blog(&blogs).unwrap().title, "x");
    }

    #[test]
    fn empty_input_is_an_error() {
        assert_eq!(favorite_blog(&[]), Err(CoreError::EmptyInput));
        assert_eq!(most_blogs(&[]), Err(CoreError::EmptyInput));
        assert_eq!(most_likes(&[]), Err(CoreError::EmptyInput));
    }

    #[test]
    fn summary_of_empty_collection() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_likes, 0);
        assert!(summary.favorite.is_none());
        assert!(summary.most_blogs.is_none());
        assert!(summary.most_likes.is_none());
    }

    #[test]
    fn favorite_projection_omits_url_and_ids() {
        let json = serde_json::to_value(favorite_blog(&scenario()).unwrap()).unwrap();
        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 3);
        assert!(json.get("url").is_none());
        assert!(json.get("id").is_none());
    }

    #[test]
    fn input_is_left_untouched() {
        let blogs = fixture();
        let before = blogs.clone();
        let _ = summarize(&blogs);
        assert_eq!(blogs, before);
    }
}
