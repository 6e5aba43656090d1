//! Rendering contract between the controllers and whatever displays state.
//!
//! Controllers only talk to a [`View`]; the helpers in this module are the
//! presentation rules every view shares.

mod recording;
mod terminal;

pub use recording::{RecordingView, ViewEvent};
pub use terminal::TerminalView;

use crate::model::{ItemId, LikedRecipe, RecipeSummary, ShoppingItem};
use crate::recipe::Recipe;

/// Titles longer than this are shortened in result and like lists
pub const TITLE_LIMIT: usize = 17;

/// Region of the screen a loader is shown in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderTarget {
    Results,
    Recipe,
}

pub trait View: Send {
    fn clear_input(&mut self);
    fn clear_results(&mut self);
    /// Render one page (1-based) of `results`
    fn render_results(&mut self, results: &[RecipeSummary], page: usize, per_page: usize);
    fn highlight_selected(&mut self, id: &str);

    fn clear_recipe(&mut self);
    fn render_recipe(&mut self, recipe: &Recipe, liked: bool);
    fn update_serving_ingredients(&mut self, recipe: &Recipe);

    fn render_item(&mut self, item: &ShoppingItem);
    fn delete_item(&mut self, id: ItemId);

    fn toggle_like_btn(&mut self, liked: bool);
    fn render_like(&mut self, like: &LikedRecipe);
    fn delete_like(&mut self, id: &str);
    fn toggle_like_menu(&mut self, num_likes: usize);

    fn render_loader(&mut self, target: LoaderTarget);
    fn clear_loader(&mut self);
    /// Tell the user something went wrong
    fn alert(&mut self, message: &str);
}

/// Pagination buttons to offer below a results page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageButtons {
    pub prev: Option<usize>,
    pub next: Option<usize>,
}

pub fn num_pages(num_results: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    num_results.div_ceil(per_page)
}

/// The slice of `results` shown on `page` (1-based); out of range pages are empty
pub fn page_slice<T>(results: &[T], page: usize, per_page: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(per_page);
    if page == 0 || start >= results.len() {
        return &[];
    }
    let end = (start + per_page).min(results.len());
    &results[start..end]
}

pub fn page_buttons(page: usize, num_results: usize, per_page: usize) -> PageButtons {
    let pages = num_pages(num_results, per_page);
    if pages <= 1 || page == 0 || page > pages {
        PageButtons::default()
    } else if page == 1 {
        PageButtons {
            prev: None,
            next: Some(2),
        }
    } else if page < pages {
        PageButtons {
            prev: Some(page - 1),
            next: Some(page + 1),
        }
    } else {
        PageButtons {
            prev: Some(page - 1),
            next: None,
        }
    }
}

/// Shorten `title` on a word boundary so it fits in `limit` characters, adding `" ..."`
pub fn limit_title(title: &str, limit: usize) -> String {
    if title.chars().count() <= limit {
        return title.to_string();
    }

    let mut kept: Vec<&str> = Vec::new();
    let mut len = 0;
    for word in title.split(' ') {
        let word_len = word.chars().count();
        if len + word_len > limit {
            break;
        }
        kept.push(word);
        len += word_len;
    }
    format!("{} ...", kept.join(" "))
}

/// Render a quantity as a cook would write it: `"2"`, `"1 1/2"`, `"1/3"`, or `"?"` when unknown
pub fn format_count(count: Option<f64>) -> String {
    let Some(count) = count else {
        return "?".to_string();
    };
    if !count.is_finite() {
        return "?".to_string();
    }

    let whole = count.trunc();
    let frac = count - whole;
    if frac.abs() < 1e-6 {
        return format!("{}", whole as i64);
    }

    match approximate_fraction(frac) {
        Some((num, den)) if num == den => format!("{}", whole as i64 + 1),
        Some((num, den)) if whole == 0.0 => format!("{}/{}", num, den),
        Some((num, den)) => format!("{} {}/{}", whole as i64, num, den),
        None => format!("{:.2}", count),
    }
}

/// Closest `num/den` with a kitchen-friendly denominator
fn approximate_fraction(frac: f64) -> Option<(u32, u32)> {
    const DENOMINATORS: [u32; 6] = [2, 3, 4, 6, 8, 16];
    DENOMINATORS
        .iter()
        .map(|&den| {
            let num = (frac * f64::from(den)).round() as u32;
            (num, den, (frac - f64::from(num) / f64::from(den)).abs())
        })
        .filter(|(num, _, err)| *num > 0 && *err < 0.01)
        .min_by(|a, b| a.2.total_cmp(&b.2))
        .map(|(num, den, _)| (num, den))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_slice() {
        let results: Vec<u32> = (1..=25).collect();
        assert_eq!(page_slice(&results, 1, 10), &results[0..10]);
        assert_eq!(page_slice(&results, 3, 10), &[21, 22, 23, 24, 25]);
        assert!(page_slice(&results, 4, 10).is_empty());
        assert!(page_slice(&results, 0, 10).is_empty());
    }

    #[test]
    fn test_page_buttons() {
        assert_eq!(page_buttons(1, 5, 10), PageButtons::default());
        assert_eq!(
            page_buttons(1, 25, 10),
            PageButtons {
                prev: None,
                next: Some(2)
            }
        );
        assert_eq!(
            page_buttons(2, 25, 10),
            PageButtons {
                prev: Some(1),
                next: Some(3)
            }
        );
        assert_eq!(
            page_buttons(3, 25, 10),
            PageButtons {
                prev: Some(2),
                next: None
            }
        );
    }

    #[test]
    fn test_limit_title() {
        assert_eq!(limit_title("Pasta with tomato and spinach", 17), "Pasta with tomato ...");
        assert_eq!(limit_title("Short title", 17), "Short title");
        assert_eq!(limit_title("Supercalifragilisticexpialidocious", 17), " ...");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(None), "?");
        assert_eq!(format_count(Some(2.0)), "2");
        assert_eq!(format_count(Some(2.5)), "2 1/2");
        assert_eq!(format_count(Some(0.5)), "1/2");
        assert_eq!(format_count(Some(1.0 / 3.0)), "1/3");
        assert_eq!(format_count(Some(0.75)), "3/4");
        assert_eq!(format_count(Some(1.999)), "2");
    }

    #[test]
    fn test_format_count_without_nice_fraction() {
        assert_eq!(format_count(Some(0.3)), "0.30");
        assert_eq!(format_count(Some(f64::NAN)), "?");
    }
}
