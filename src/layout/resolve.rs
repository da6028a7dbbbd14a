use crate::config::{Side, SideStyle, WidthIntent};

/// The widths given to the left and right blocks, in pixels. These are not rounded: rounding
/// happens when the blocks are wrapped and drawn.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ResolvedWidths {
    pub left: f32,
    pub right: f32,
}

/// Which sizing policy decided the widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidthPolicy {
    /// Both sides have a positive weight. The free side is measured, the other side is sized
    /// relative to it, and both are scaled down together if they don't fit.
    Weighted,
    /// At least one side asks for an exact width. The other side fills or shrinks into the rest.
    /// If both sides are exact, the left side is the one that gets its width first.
    Fixed,
    /// Neither side is exact. If the left side fills, it takes everything and the right side gets
    /// nothing. If it shrinks, the right side fills or shrinks into the rest.
    Default,
}

struct Rule {
    policy: WidthPolicy,
    applies: fn(&SideStyle, &SideStyle) -> bool,
}

/// The sizing policies, in precedence order. The first rule that applies wins.
const RULES: [Rule; 3] = [
    Rule {
        policy: WidthPolicy::Weighted,
        applies: both_weighted,
    },
    Rule {
        policy: WidthPolicy::Fixed,
        applies: any_exact,
    },
    Rule {
        policy: WidthPolicy::Default,
        applies: no_exact,
    },
];

fn both_weighted(left: &SideStyle, right: &SideStyle) -> bool {
    left.is_weighted() && right.is_weighted()
}

fn any_exact(left: &SideStyle, right: &SideStyle) -> bool {
    left.width.exact().is_some() || right.width.exact().is_some()
}

fn no_exact(left: &SideStyle, right: &SideStyle) -> bool {
    !any_exact(left, right)
}

/// Pick the sizing policy for this pair of sides.
pub fn choose_policy(left: &SideStyle, right: &SideStyle) -> WidthPolicy {
    RULES
        .iter()
        .find(|rule| (rule.applies)(left, right))
        .map(|rule| rule.policy)
        // The last rule applies whenever the one before it doesn't.
        .unwrap_or(WidthPolicy::Default)
}

/// Divide `usable` pixels of width between the left and right blocks.
///
/// `measure` gives the natural, unwrapped width of a side's text (0 if it has none). It is only
/// called for sides whose width depends on their text.
///
/// The result is computed from the declared intents and weights alone; nothing carries over from
/// earlier calls.
pub fn resolve_widths(
    usable: f32,
    left: &SideStyle,
    right: &SideStyle,
    free_side: Side,
    mut measure: impl FnMut(&SideStyle) -> f32,
) -> ResolvedWidths {
    let usable = usable.max(0.0);
    let policy = choose_policy(left, right);
    let widths = match policy {
        WidthPolicy::Weighted => weighted(usable, left, right, free_side, &mut measure),
        WidthPolicy::Fixed => fixed(usable, left, right, &mut measure),
        WidthPolicy::Default => default(usable, left, right, &mut measure),
    };
    tracing::debug!(
        ?policy,
        usable,
        left = widths.left,
        right = widths.right,
        "resolved widths"
    );
    widths
}

fn weighted(
    usable: f32,
    left: &SideStyle,
    right: &SideStyle,
    free_side: Side,
    measure: &mut impl FnMut(&SideStyle) -> f32,
) -> ResolvedWidths {
    let (left_weight, right_weight) = (left.weight, right.weight);
    let mut widths = match free_side {
        Side::Left => {
            let left = measure(left);
            ResolvedWidths {
                left,
                right: left * right_weight / left_weight,
            }
        }
        Side::Right => {
            let right = measure(right);
            ResolvedWidths {
                left: right * left_weight / right_weight,
                right,
            }
        }
    };
    if widths.left + widths.right > usable {
        let total_weight = left_weight + right_weight;
        widths.left = usable * left_weight / total_weight;
        widths.right = usable * right_weight / total_weight;
    }
    widths
}

fn fixed(
    usable: f32,
    left: &SideStyle,
    right: &SideStyle,
    measure: &mut impl FnMut(&SideStyle) -> f32,
) -> ResolvedWidths {
    if let Some(left_width) = left.width.exact() {
        ResolvedWidths {
            left: left_width,
            right: fit_into(right, usable - left_width, measure),
        }
    } else if let Some(right_width) = right.width.exact() {
        ResolvedWidths {
            left: fit_into(left, usable - right_width, measure),
            right: right_width,
        }
    } else {
        default(usable, left, right, measure)
    }
}

fn default(
    usable: f32,
    left: &SideStyle,
    right: &SideStyle,
    measure: &mut impl FnMut(&SideStyle) -> f32,
) -> ResolvedWidths {
    match left.width {
        // A filling left side starves the right side, whatever the right side asked for.
        WidthIntent::Fill => ResolvedWidths {
            left: usable,
            right: 0.0,
        },
        WidthIntent::Shrink | WidthIntent::Exact(_) => {
            let left_width = fit_into(left, usable, measure);
            ResolvedWidths {
                left: left_width,
                right: fit_into(right, usable - left_width, measure),
            }
        }
    }
}

/// The width a side takes when `remaining` pixels are left for it.
fn fit_into(
    side: &SideStyle,
    remaining: f32,
    measure: &mut impl FnMut(&SideStyle) -> f32,
) -> f32 {
    let remaining = remaining.max(0.0);
    match side.width {
        WidthIntent::Exact(px) => px,
        WidthIntent::Fill => remaining,
        WidthIntent::Shrink => measure(side).min(remaining),
    }
}
