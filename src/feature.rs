/*!
 * Cross-cutting extension hooks around every filter invocation.
 *
 * A [`Feature`] observes or rewrites segment content at the four hook
 * points surrounding encode and decode. Features are pluggable,
 * third-party code: the pipeline must survive anything they do, so flow
 * control is an explicit verdict (never an exception side-channel) and
 * a failing feature is logged and skipped while the run carries on with
 * the content it had before that feature ran.
 */

use std::fmt;
use std::sync::Arc;

use log::{trace, warn};

/// Where in a filter invocation a feature is being consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookPoint {
    BeforeEncode,
    AfterEncode,
    BeforeDecode,
    AfterDecode,
}

impl fmt::Display for HookPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            HookPoint::BeforeEncode => "before-encode",
            HookPoint::AfterEncode => "after-encode",
            HookPoint::BeforeDecode => "before-decode",
            HookPoint::AfterDecode => "after-decode",
        };
        write!(f, "{}", label)
    }
}

/// Outcome of one feature application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeatureVerdict {
    /// Hand the (possibly rewritten) content to the next feature.
    Continue(String),
    /// Keep this content and skip the remaining features at this hook
    /// point. The next hook point consults the full set again.
    SkipRemaining(String),
}

/// A pluggable observer/modifier attached to pipeline operations.
pub trait Feature: Send + Sync {
    /// Stable name, used in logs when the feature misbehaves.
    fn name(&self) -> &str;

    /// Inspects or rewrites the subject at the given hook point.
    fn apply(&self, point: HookPoint, subject: &str) -> anyhow::Result<FeatureVerdict>;
}

/// An ordered set of features, applied in registration order.
#[derive(Default)]
pub struct FeatureSet {
    features: Vec<Arc<dyn Feature>>,
}

impl FeatureSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a feature; it will run after every feature already present.
    pub fn register(&mut self, feature: Arc<dyn Feature>) {
        self.features.push(feature);
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Runs the set at one hook point, each feature receiving the previous
    /// feature's output. A feature error is logged and that feature's
    /// input carries forward unchanged (fail-open).
    pub fn apply(&self, point: HookPoint, subject: String) -> String {
        if self.features.is_empty() {
            return subject;
        }

        let mut current = subject;
        for feature in &self.features {
            match feature.apply(point, &current) {
                Ok(FeatureVerdict::Continue(next)) => current = next,
                Ok(FeatureVerdict::SkipRemaining(next)) => {
                    trace!(
                        "Feature '{}' skipped remaining features at {}",
                        feature.name(),
                        point
                    );
                    current = next;
                    break;
                }
                Err(error) => {
                    warn!(
                        "Feature '{}' failed at {}, continuing without it: {}",
                        feature.name(),
                        point,
                        error
                    );
                }
            }
        }
        current
    }
}

impl fmt::Debug for FeatureSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.features.iter().map(|feature| feature.name()).collect();
        f.debug_struct("FeatureSet").field("features", &names).finish()
    }
}
