//! Cycling through the members of a finite, ordered set of values.

use enum_iterator::IntoEnumIterator;

/// A type whose values form a finite set with a fixed iteration order.
///
/// Every enum deriving [`IntoEnumIterator`] is `Enumerable` in declaration order.
/// Other types can implement this by hand.
pub trait Enumerable: Sized {
    type Members: Iterator<Item = Self>;

    /// Returns all members in iteration order.
    fn members() -> Self::Members;
}

impl<T: IntoEnumIterator> Enumerable for T {
    type Members = T::Iterator;

    fn members() -> T::Iterator { T::into_enum_iter() }
}

/// Successor and predecessor with wraparound.
///
/// Members are looked up with `PartialEq`, taking the first match in iteration order.
/// The successor is decided by that position alone, never by the member's underlying value.
///
/// None of these methods panic. If the set is empty or `self` is not one of its members,
/// `next` and `prev` return `self` unchanged.
pub trait Cycle: Sized {
    /// Returns the member that comes after `self`, or the first member if `self` is the last.
    fn next(self) -> Self;
    /// Returns the member that comes before `self`, or the last member if `self` is the first.
    fn prev(self) -> Self;
    /// Index of the first member equal to `self`.
    fn position(&self) -> Option<usize>;
    /// Iterates over one full turn of the cycle starting at `self`.
    fn orbit(self) -> Orbit<Self>;
}

impl<T: Enumerable + PartialEq> Cycle for T {
    fn next(self) -> T {
        let mut members = T::members();
        if members.any(|member| member == self) {
            Iterator::next(&mut members)
                .or_else(|| Iterator::next(&mut T::members()))
                .unwrap_or(self)
        } else {
            self
        }
    }

    fn prev(self) -> T {
        let mut prev = None;
        for member in T::members() {
            if member == self {
                return match prev {
                    Some(prev) => prev,
                    None => T::members().last().unwrap_or(self),
                }
            }
            prev = Some(member);
        }
        self
    }

    fn position(&self) -> Option<usize> {
        Iterator::position(&mut T::members(), |member| member == *self)
    }

    fn orbit(self) -> Orbit<T> {
        let remaining = if self.position().is_some() { T::members().count() } else { 1 };
        Orbit { current: Some(self), remaining }
    }
}

/// Iterator returned by [`Cycle::orbit`].
///
/// For a member of a set of size N this yields N values, the first being the starting member.
/// For a non-member it yields the starting value once.
#[derive(Debug, Clone)]
pub struct Orbit<T> {
    current: Option<T>,
    remaining: usize,
}

impl<T: Cycle + Clone> Iterator for Orbit<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.remaining == 0 { return None }
        self.remaining -= 1;
        let current = self.current.take()?;
        if self.remaining > 0 {
            self.current = Some(current.clone().next());
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: Cycle + Clone> ExactSizeIterator for Orbit<T> {}

#[cfg(test)]
mod tests {
    use {
        enum_iterator::IntoEnumIterator,
        super::*,
    };

    #[derive(Debug, Clone, Copy, IntoEnumIterator, PartialEq, Eq)]
    enum Simple {
        Zero,
        One,
        Two,
    }

    #[derive(Debug, Clone, Copy, IntoEnumIterator, PartialEq, Eq)]
    enum StartAtTen {
        FirstAsTen = 10,
        Eleven,
        Twelve,
    }

    #[derive(Debug, Clone, Copy, IntoEnumIterator, PartialEq, Eq)]
    enum Single {
        Only,
    }

    /// Hand-written set whose member list is empty even though values exist.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Vacant(u8);

    impl Enumerable for Vacant {
        type Members = std::iter::Empty<Vacant>;

        fn members() -> Self::Members { std::iter::empty() }
    }

    /// Members are the odd numbers below 6, so even values are not members.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Odd(u8);

    impl Enumerable for Odd {
        type Members = std::vec::IntoIter<Odd>;

        fn members() -> Self::Members { vec![Odd(1), Odd(3), Odd(5)].into_iter() }
    }

    #[test]
    fn simple_next() {
        assert_eq!(Simple::Zero.next(), Simple::One);
        assert_eq!(Simple::Zero.next() as i32, 1);
        assert_eq!(Simple::One.next(), Simple::Two);
        assert_eq!(Simple::One.next() as i32, 2);
        assert_eq!(Simple::Two.next(), Simple::Zero);
        assert_eq!(Simple::Two.next() as i32, 0);
    }

    #[test]
    fn start_at_ten_next() {
        assert_eq!(StartAtTen::FirstAsTen.next(), StartAtTen::Eleven);
        assert_eq!(StartAtTen::Eleven.next() as i32, 12);
        assert_eq!(StartAtTen::Twelve.next(), StartAtTen::FirstAsTen);
        assert_eq!(StartAtTen::Twelve.next() as i32, 10);
    }

    #[test]
    fn prev_wraps_to_last() {
        assert_eq!(Simple::Zero.prev(), Simple::Two);
        assert_eq!(Simple::Two.prev(), Simple::One);
        assert_eq!(StartAtTen::FirstAsTen.prev(), StartAtTen::Twelve);
    }

    #[test]
    fn single_member_is_its_own_neighbour() {
        assert_eq!(Single::Only.next(), Single::Only);
        assert_eq!(Single::Only.prev(), Single::Only);
        assert_eq!(Single::Only.orbit().collect::<Vec<_>>(), vec![Single::Only]);
    }

    #[test]
    fn empty_set_is_a_no_op() {
        assert_eq!(Vacant(7).next(), Vacant(7));
        assert_eq!(Vacant(7).prev(), Vacant(7));
        assert_eq!(Vacant(7).position(), None);
        assert_eq!(Vacant(7).orbit().collect::<Vec<_>>(), vec![Vacant(7)]);
    }

    #[test]
    fn non_member_is_returned_unchanged() {
        assert_eq!(Odd(1).next(), Odd(3));
        assert_eq!(Odd(5).next(), Odd(1));
        assert_eq!(Odd(4).next(), Odd(4));
        assert_eq!(Odd(4).prev(), Odd(4));
        assert_eq!(Odd(4).position(), None);
    }

    #[test]
    fn position_follows_declaration_order() {
        assert_eq!(StartAtTen::FirstAsTen.position(), Some(0));
        assert_eq!(StartAtTen::Twelve.position(), Some(2));
        assert_eq!(Odd(5).position(), Some(2));
    }

    #[test]
    fn orbit_is_one_full_turn() {
        let orbit = Simple::One.orbit();
        assert_eq!(orbit.len(), 3);
        assert_eq!(orbit.collect::<Vec<_>>(), vec![Simple::One, Simple::Two, Simple::Zero]);
    }
}
