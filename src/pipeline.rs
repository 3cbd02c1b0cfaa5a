/*!
 * The two user-facing transformations.
 *
 * A pipeline owns an ordered filter chain plus the active feature set and
 * exposes the segment operations: [`FilterPipeline::to_layer1`] protects
 * raw content for TM/MT, [`FilterPipeline::to_layer0`] restores it. The
 * reverse transform walks the chain backwards: a filter that encoded
 * later saw the earlier filters' output, so its placeholders are the
 * outermost and must come off first, exactly like unwinding a stack.
 *
 * One transformation is a synchronous fold over the chain. Pipelines hold
 * no per-segment state (the id-minting session lives on the call stack),
 * so a single instance can serve many threads.
 */

use std::sync::Arc;

use log::{debug, trace};

use crate::feature::{FeatureSet, HookPoint};
use crate::filters::{EncodeSession, Filter};
use crate::profile::ChainProfile;
use crate::registry::FilterRegistry;

/// An ordered filter chain bound to a feature set.
#[derive(Debug)]
pub struct FilterPipeline {
    chain: Vec<Arc<dyn Filter>>,
    features: FeatureSet,
}

impl FilterPipeline {
    /// A pipeline over the given chain with no features attached.
    pub fn new(chain: Vec<Arc<dyn Filter>>) -> Self {
        Self::with_features(chain, FeatureSet::new())
    }

    pub fn with_features(chain: Vec<Arc<dyn Filter>>, features: FeatureSet) -> Self {
        Self { chain, features }
    }

    /// Resolves a profile's filter names through the registry. Names the
    /// registry does not know are skipped, so a profile written against a
    /// different vocabulary version still yields a working pipeline.
    pub fn from_profile(profile: &ChainProfile, registry: &FilterRegistry) -> Self {
        Self::new(registry.filters_for_names(&profile.filters))
    }

    /// The chain in execution (encode) order.
    pub fn filters(&self) -> &[Arc<dyn Filter>] {
        &self.chain
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Layer 0 -> Layer 1: protects every inline code the chain recognizes
    /// behind opaque placeholder tags. Already-protected spans are left
    /// untouched, so feeding Layer 1 content back in is harmless.
    pub fn to_layer1(&self, content: &str) -> String {
        if content.is_empty() {
            return String::new();
        }

        let mut session = EncodeSession::new();
        let mut current = content.to_string();
        for filter in &self.chain {
            current = self.features.apply(HookPoint::BeforeEncode, current);
            let before_len = current.len();
            current = filter.encode(&current, &mut session);
            trace!(
                "Encoded with '{}': {} -> {} bytes",
                filter.name(),
                before_len,
                current.len()
            );
            current = self.features.apply(HookPoint::AfterEncode, current);
        }

        debug!(
            "Transformed segment to layer 1: {} filters, {} -> {} bytes, {} tags minted",
            self.chain.len(),
            content.len(),
            current.len(),
            session.minted()
        );
        current
    }

    /// Layer 1 -> Layer 0: restores the original inline codes, undoing the
    /// chain in strictly reverse order.
    pub fn to_layer0(&self, content: &str) -> String {
        if content.is_empty() {
            return String::new();
        }

        let mut current = content.to_string();
        for filter in self.chain.iter().rev() {
            current = self.features.apply(HookPoint::BeforeDecode, current);
            let before_len = current.len();
            current = filter.decode(&current);
            trace!(
                "Decoded with '{}': {} -> {} bytes",
                filter.name(),
                before_len,
                current.len()
            );
            current = self.features.apply(HookPoint::AfterDecode, current);
        }

        debug!(
            "Restored segment to layer 0: {} filters, {} -> {} bytes",
            self.chain.len(),
            content.len(),
            current.len()
        );
        current
    }
}
