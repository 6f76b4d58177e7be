//! Testimonial marquee.
//!
//! The testimonials scroll sideways forever. The list is repeated into one
//! long track that a CSS animation translates from `0` to `-50%`; with an
//! even number of copies the second half is identical to the first, so the
//! jump back to `0` is invisible.

/// Card accent classes, cycled by position.
pub const ACCENTS: [&str; 4] = ["accent-pink", "accent-blue", "accent-purple", "accent-orange"];

/// Number of stars a rating is drawn out of.
pub const MAX_RATING: u8 = 5;

/// The list repeated `copies` times. Odd counts are rounded up so the
/// `-50%` loop point always falls on a copy boundary.
pub fn track<T>(items: &[T], copies: usize) -> Vec<&T> {
    let copies = copies.max(2).next_multiple_of(2);
    items.iter().cycle().take(items.len() * copies).collect()
}

/// Accent class for the card at `index` in the original list.
pub fn accent_for(index: usize) -> &'static str {
    ACCENTS[index % ACCENTS.len()]
}

/// Filled/empty flags for the five rating stars.
pub fn stars(rating: u8) -> [bool; MAX_RATING as usize] {
    std::array::from_fn(|i| i < rating as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_repeats_in_order() {
        let items = ["a", "b", "c"];
        let t = track(&items, 4);
        assert_eq!(t.len(), 12);
        assert_eq!(t[..3], [&"a", &"b", &"c"]);
        assert_eq!(t[3..6], [&"a", &"b", &"c"]);
    }

    #[test]
    fn odd_copies_round_up() {
        let items = [1, 2];
        assert_eq!(track(&items, 3).len(), 8);
        assert_eq!(track(&items, 1).len(), 4);
        assert_eq!(track(&items, 0).len(), 4);
    }

    #[test]
    fn empty_list_gives_empty_track() {
        let items: [u8; 0] = [];
        assert!(track(&items, 4).is_empty());
    }

    #[test]
    fn accents_cycle() {
        assert_eq!(accent_for(0), "accent-pink");
        assert_eq!(accent_for(4), "accent-pink");
        assert_eq!(accent_for(5), "accent-blue");
    }

    #[test]
    fn stars_fill_up_to_rating() {
        assert_eq!(stars(4), [true, true, true, true, false]);
        assert_eq!(stars(5), [true; 5]);
    }
}
