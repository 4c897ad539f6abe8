//! Field-by-field overlay of one configuration onto another.
//!
//! Only unset fields in the destination are filled. Lists are replaced
//! wholesale, never concatenated.

use super::schema::Configuration;
use std::path::PathBuf;
use std::time::Duration;

/// A value that can be "unset" by holding its zero value.
trait Unset {
    fn is_unset(&self) -> bool;
}

impl Unset for String {
    fn is_unset(&self) -> bool {
        self.is_empty()
    }
}

impl Unset for PathBuf {
    fn is_unset(&self) -> bool {
        self.as_os_str().is_empty()
    }
}

impl<T> Unset for Vec<T> {
    fn is_unset(&self) -> bool {
        self.is_empty()
    }
}

impl Unset for u32 {
    fn is_unset(&self) -> bool {
        *self == 0
    }
}

impl Unset for Duration {
    fn is_unset(&self) -> bool {
        self.is_zero()
    }
}

fn fill<T: Unset + Clone>(slot: &mut T, lower: &T) {
    if slot.is_unset() && !lower.is_unset() {
        slot.clone_from(lower);
    }
}

impl Configuration {
    /// Fill every unset field of `self` from `lower`.
    pub fn overlay(&mut self, lower: &Configuration) {
        fill(&mut self.password, &lower.password);
        fill(&mut self.theme_id, &lower.theme_id);
        fill(&mut self.domain, &lower.domain);
        fill(&mut self.directory, &lower.directory);
        fill(&mut self.ignored_files, &lower.ignored_files);
        fill(&mut self.bucket_size, &lower.bucket_size);
        fill(&mut self.refill_rate, &lower.refill_rate);
        fill(&mut self.concurrency, &lower.concurrency);
        fill(&mut self.proxy, &lower.proxy);
        fill(&mut self.ignores, &lower.ignores);
        fill(&mut self.timeout, &lower.timeout);
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Configuration::default()
    }
}
