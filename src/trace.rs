//! Recording the intermediate levels of de Casteljau and de Boor.

use crate::Point2;
use alloc::vec::Vec;

/// Receives every interpolation level produced by an evaluation.
///
/// Levels arrive in order: the input points first, the single resulting
/// point last. The unit type is the no-op recorder used by plain
/// evaluation; because both paths run the same code, a trace always ends in
/// exactly the point that plain evaluation returns.
pub trait Recorder<T> {
    fn record<I>(&mut self, level: I)
    where
        I: IntoIterator<Item = Point2<T>>;
}

impl<T> Recorder<T> for () {
    #[inline]
    fn record<I>(&mut self, _level: I)
    where
        I: IntoIterator<Item = Point2<T>>,
    {
    }
}

/// The full construction pyramid of one evaluation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConstructionTrace<T> {
    levels: Vec<Vec<Point2<T>>>,
}

impl<T: Copy> ConstructionTrace<T> {
    pub fn new() -> Self {
        Self { levels: Vec::new() }
    }

    pub fn levels(&self) -> &[Vec<Point2<T>>] {
        &self.levels
    }

    pub fn into_levels(self) -> Vec<Vec<Point2<T>>> {
        self.levels
    }

    /// Number of recorded levels.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// The evaluated point, i.e. the sole point of the last level.
    pub fn point(&self) -> Option<Point2<T>> {
        match self.levels.last() {
            Some(level) if level.len() == 1 => Some(level[0]),
            _ => None,
        }
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Vec<Point2<T>>> {
        self.levels.iter()
    }
}

impl<T> Recorder<T> for ConstructionTrace<T> {
    fn record<I>(&mut self, level: I)
    where
        I: IntoIterator<Item = Point2<T>>,
    {
        self.levels.push(level.into_iter().collect());
    }
}

impl<'a, T: Copy> IntoIterator for &'a ConstructionTrace<T> {
    type Item = &'a Vec<Point2<T>>;
    type IntoIter = core::slice::Iter<'a, Vec<Point2<T>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
