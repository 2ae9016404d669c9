//! Priority-prefix ordering with a shuffled remainder.

use rand::Rng;
use rustc_hash::{FxHashMap, FxHashSet};

use super::{Icon, IconSet};
use crate::options::IconOptions;
use crate::util::shuffle_with;

/// Order `icons` for display: icons named in `priority` first, in priority
/// order, then everything else in a fresh random order.
///
/// Priority names with no matching icon are skipped. The result is always a
/// permutation of the input.
pub fn order_icons<'a, A, S: AsRef<str>>(
    icons: &'a [Icon<A>],
    priority: &[S],
) -> Vec<&'a Icon<A>> {
    order_icons_with(icons, priority, &mut rand::rng())
}

/// [`order_icons`] with a caller-supplied generator for the remainder.
pub fn order_icons_with<'a, A, S: AsRef<str>, R: Rng + ?Sized>(
    icons: &'a [Icon<A>],
    priority: &[S],
    rng: &mut R,
) -> Vec<&'a Icon<A>> {
    let wanted: FxHashSet<&str> =
        priority.iter().map(AsRef::<str>::as_ref).collect();

    let mut prioritized: FxHashMap<&str, Vec<&Icon<A>>> = FxHashMap::default();
    let mut remaining = Vec::new();
    for icon in icons {
        if wanted.contains(icon.name.as_str()) {
            prioritized.entry(icon.name.as_str()).or_default().push(icon);
        } else {
            remaining.push(icon);
        }
    }

    let mut ordered = Vec::with_capacity(icons.len());
    for name in priority {
        // Removing keeps a repeated priority name from emitting twice.
        if let Some(matches) = prioritized.remove(name.as_ref()) {
            ordered.extend(matches);
        }
    }
    ordered.extend(shuffle_with(&remaining, rng));
    ordered
}

/// An icon set paired with its priority list.
///
/// Every call to [`ordered`](Self::ordered) reshuffles the non-priority
/// icons; nothing is cached.
#[derive(Debug, Clone)]
pub struct IconOrderer<A> {
    icons: IconSet<A>,
    priority: Vec<String>,
}

impl<A> IconOrderer<A> {
    /// Orderer over `icons` with the given priority names.
    pub fn new<S: Into<String>>(
        icons: IconSet<A>,
        priority: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            icons,
            priority: priority.into_iter().map(Into::into).collect(),
        }
    }

    /// Orderer using the priority list from options.
    pub fn from_options(icons: IconSet<A>, options: &IconOptions) -> Self {
        Self::new(icons, options.priority.iter().cloned())
    }

    /// The underlying icon set.
    pub fn icons(&self) -> &IconSet<A> {
        &self.icons
    }

    /// Priority names in display order.
    pub fn priority(&self) -> &[String] {
        &self.priority
    }

    /// Display order using the thread-local generator.
    pub fn ordered(&self) -> Vec<&Icon<A>> {
        order_icons(self.icons.as_slice(), &self.priority)
    }

    /// Display order using `rng` for the shuffled remainder.
    pub fn ordered_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<&Icon<A>> {
        order_icons_with(self.icons.as_slice(), &self.priority, rng)
    }
}
