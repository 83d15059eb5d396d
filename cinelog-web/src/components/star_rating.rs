use yew::{Callback, Html, Properties, classes, function_component, html};

/// Render a rating as a five-star string, filled to the floor of the value.
pub fn star_string(rating: f32) -> String {
    let filled = (rating.floor().max(0.0) as usize).min(5);
    let mut stars = "★".repeat(filled);
    stars.push_str(&"☆".repeat(5 - filled));
    stars
}

#[derive(Properties, PartialEq)]
pub struct StarRatingProps {
    /// Currently selected star count, 0 when nothing is selected.
    pub selected: u8,
    pub on_select: Callback<u8>,
}

/// Interactive 1-5 star selector for the log composer.
#[function_component(StarRating)]
pub fn star_rating(props: &StarRatingProps) -> Html {
    html! {
        <div class="flex gap-1 text-2xl">
            { for (1..=5u8).map(|value| {
                let on_select = props.on_select.clone();
                let active = value <= props.selected;
                let class = if active {
                    classes!("text-warning", "cursor-pointer")
                } else {
                    classes!("text-base-content/40", "cursor-pointer")
                };
                html! {
                    <span
                        {class}
                        onclick={Callback::from(move |_| on_select.emit(value))}
                    >
                        { if active { "★" } else { "☆" } }
                    </span>
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_ratings_fill_stars() {
        assert_eq!(star_string(5.0), "★★★★★");
        assert_eq!(star_string(3.0), "★★★☆☆");
    }

    #[test]
    fn half_stars_round_down() {
        assert_eq!(star_string(4.5), "★★★★☆");
        assert_eq!(star_string(0.5), "☆☆☆☆☆");
    }

    #[test]
    fn out_of_range_values_clamp() {
        assert_eq!(star_string(0.0), "☆☆☆☆☆");
        assert_eq!(star_string(-1.0), "☆☆☆☆☆");
        assert_eq!(star_string(9.0), "★★★★★");
    }
}
