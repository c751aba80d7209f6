//! The gram filter pipeline: classification plus expansion over a token
//! stream.
//!
//! [`GramFilterPipeline`] wraps any [`TokenSource`] and is itself one, so
//! pipelines stack like any other analysis stage. Each pull either forwards
//! an exempt token untouched or serves the next gram from the in-flight
//! expansion; at most one source token is being expanded at any time, so
//! memory stays bounded no matter how long the stream runs.

use crate::classify;
use crate::config::GramSpec;
use crate::error::Result;
use crate::gram::GramGenerator;
use crate::source::TokenSource;
use crate::token::Token;

/// Expands tokens pulled from `upstream` according to a validated
/// [`GramSpec`].
///
/// Output order is deterministic: source tokens keep their stream order, and
/// each token's grams come out in the generator's enumeration order before
/// the next token is touched. The first gram of a token carries the token's
/// own position increment; the rest carry 0, so every gram of one token
/// occupies the same logical position.
#[derive(Debug)]
pub struct GramFilterPipeline<S> {
    upstream: S,
    spec: GramSpec,
    active: Option<GramGenerator>,
    exhausted: bool,
}

impl<S: TokenSource> GramFilterPipeline<S> {
    /// Wrap `upstream` with gram expansion. Fails when `spec` is invalid,
    /// so a constructed pipeline never revisits its configuration.
    pub fn new(upstream: S, spec: GramSpec) -> Result<Self> {
        spec.validate()?;
        Ok(GramFilterPipeline {
            upstream,
            spec,
            active: None,
            exhausted: false,
        })
    }

    /// The configuration this pipeline runs under.
    pub fn spec(&self) -> &GramSpec {
        &self.spec
    }

    /// Consume the pipeline and hand back its upstream source.
    pub fn into_inner(self) -> S {
        self.upstream
    }

    /// Produce the next output token, or `Ok(None)` at end of stream.
    ///
    /// Once exhausted, the pipeline keeps returning `Ok(None)` without
    /// touching the upstream again until [`reset`](Self::reset).
    pub fn pull(&mut self) -> Result<Option<Token>> {
        loop {
            // Drain the in-flight expansion first.
            if let Some(generator) = self.active.as_mut() {
                if let Some(gram) = generator.next_gram()? {
                    return Ok(Some(gram));
                }
                self.active = None;
            }
            if self.exhausted {
                return Ok(None);
            }

            let Some(token) = self.upstream.pull()? else {
                self.exhausted = true;
                return Ok(None);
            };
            if classify::is_exempt(&token, &self.spec) {
                return Ok(Some(token));
            }
            // `None` means the token was dropped (full mode, sub-minimum
            // length); loop around and pull the next one.
            self.active = GramGenerator::begin(token, &self.spec);
        }
    }

    /// Rewind the pipeline: resets the upstream, discards any in-flight
    /// expansion, and clears the end-of-stream latch.
    pub fn reset(&mut self) -> Result<()> {
        self.upstream.reset()?;
        self.active = None;
        self.exhausted = false;
        Ok(())
    }
}

impl<S: TokenSource> TokenSource for GramFilterPipeline<S> {
    fn pull(&mut self) -> Result<Option<Token>> {
        GramFilterPipeline::pull(self)
    }

    fn reset(&mut self) -> Result<()> {
        GramFilterPipeline::reset(self)
    }
}

impl<S: TokenSource> Iterator for GramFilterPipeline<S> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        self.pull().transpose()
    }
}
