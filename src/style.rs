//! Turns one foreground and background color pair into the four styles used for
//! highlighting.
//!
//! Every group is the foreground at a different opacity, composited over the background,
//! with a pair of soft text shadows in the same hue.

use crate::color::{blend, Rgba};
use std::fmt;

/// The groups of token categories that share a look
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum StyleGroup {
    Keyword,
    Punctuation,
    /// Strings and regex literals
    String,
    Comment,
}

/// A text shadow: horizontal offset and blur radius in pixels
#[derive(Debug, PartialEq, Clone, Copy)]
struct Shadow {
    x: i32,
    blur: u32,
    /// Alpha multiplier relative to the group's opacity
    alpha: f64,
}

/// Fixed look of a group
struct Recipe {
    opacity: f64,
    shadows: [Shadow; 2],
    italic: bool,
}

const fn glow(blur: u32, alpha: f64) -> Shadow {
    Shadow { x: 0, blur, alpha }
}

impl StyleGroup {
    pub const ALL: [StyleGroup; 4] = [
        StyleGroup::Keyword,
        StyleGroup::Punctuation,
        StyleGroup::String,
        StyleGroup::Comment,
    ];

    fn recipe(self) -> Recipe {
        match self {
            StyleGroup::Keyword => Recipe {
                opacity: 1.0,
                shadows: [glow(9, 0.7), glow(2, 0.4)],
                italic: false,
            },
            StyleGroup::Punctuation => Recipe {
                opacity: 0.6,
                shadows: [glow(7, 0.25), glow(3, 0.25)],
                italic: false,
            },
            StyleGroup::String => Recipe {
                opacity: 0.7,
                shadows: [
                    Shadow { x: 3, blur: 5, alpha: 0.2 },
                    Shadow { x: -3, blur: 5, alpha: 0.2 },
                ],
                italic: false,
            },
            StyleGroup::Comment => Recipe {
                opacity: 0.5,
                shadows: [
                    Shadow { x: 3, blur: 5, alpha: 0.25 },
                    Shadow { x: -3, blur: 5, alpha: 0.25 },
                ],
                italic: true,
            },
        }
    }
}

/// A resolved style, ready to be placed in a `style` attribute
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Style {
    /// The text color
    pub color: String,
    /// The two text shadows, e.g. `3px 0px 5px rgba(0,0,0,0.14)`
    pub shadows: [String; 2],
    pub italic: bool,
}

impl Style {
    /// Resolve the style of one group for a foreground and background pair
    pub fn new(group: StyleGroup, fg: Rgba, bg: Rgba) -> Self {
        let recipe = group.recipe();
        let alpha = fg.a * recipe.opacity;
        let color = blend(bg, fg.with_alpha(alpha)).to_css();
        let shadows = recipe.shadows.map(|s| {
            let shade = blend(bg, fg.with_alpha(fg.a * s.alpha * recipe.opacity));
            format!("{}px 0px {}px {}", s.x, s.blur, shade.to_css())
        });
        Self {
            color,
            shadows,
            italic: recipe.italic,
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "color: {}; text-shadow: {}, {}",
            self.color, self.shadows[0], self.shadows[1]
        )?;
        if self.italic {
            write!(f, "; font-style: italic")?;
        }
        Ok(())
    }
}

/// The four finished styles for one color pair
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Styles {
    pub keyword: String,
    pub punctuation: String,
    pub string: String,
    pub comment: String,
}

impl Styles {
    /// Get the inline CSS for a group
    pub fn get(&self, group: StyleGroup) -> &str {
        match group {
            StyleGroup::Keyword => &self.keyword,
            StyleGroup::Punctuation => &self.punctuation,
            StyleGroup::String => &self.string,
            StyleGroup::Comment => &self.comment,
        }
    }
}

/// Compute the style of every group for a foreground and background pair
pub fn compute_styles(fg: Rgba, bg: Rgba) -> Styles {
    let css = |group| Style::new(group, fg, bg).to_string();
    Styles {
        keyword: css(StyleGroup::Keyword),
        punctuation: css(StyleGroup::Punctuation),
        string: css(StyleGroup::String),
        comment: css(StyleGroup::Comment),
    }
}
