//! VoiceMerger: the per-agent session aggregate.
//!
//! Owns the base style and the three stance buckets. Collaborator calls
//! (classifier, tagger) are awaited before any lock is taken; bucket
//! mutation then happens as one check-then-append under the write lock, so
//! concurrent observations never store duplicates.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde_json::Value;
use timbre_composition::{is_mature, Composer};
use timbre_core::config::{LlmConfig, MergerConfig};
use timbre_core::models::{Bucket, BucketSet, GenerationConfig, GenerationFallback};
use timbre_core::traits::{
    IPosTagger, IRelationalModel, IStanceClassifier, NoOpClassifier, NoOpTagger,
};
use timbre_core::{Lexicon, StanceBand, TasteConfig, TimbreConfig, TimbreResult};
use timbre_extraction::FeatureExtractor;
use timbre_learning::{normalize_optional, BucketStore};
use timbre_llm::{LlmBackend, LlmPosTagger, LlmStanceClassifier};
use timbre_relational::RelationalBridge;
use tracing::{debug, info, warn};

use crate::diagnostics::{DebugBucket, LexDetails};
use crate::snapshot::{MergerSnapshot, SnapshotCfg};
use crate::taste::{merge_lexicon, merge_templates, LexiconOverride, Persona, SyntaxOverride};
use crate::utterance::{Observation, Utterance};

pub struct VoiceMerger<C = NoOpClassifier, T = NoOpTagger> {
    taste: RwLock<TasteConfig>,
    store: RwLock<BucketStore>,
    config: MergerConfig,
    composer: Composer,
    classifier: C,
    extractor: FeatureExtractor<T>,
    relational: RelationalBridge,
}

impl VoiceMerger {
    /// A merger with no collaborators: every utterance is neutral and
    /// extracted heuristically, and no relational state is touched.
    pub fn new(taste: TasteConfig, config: MergerConfig) -> Self {
        let store = BucketStore::seeded(&taste.effective_templates(), &taste.effective_lexicon());
        Self {
            composer: Composer::from_config(&config),
            taste: RwLock::new(taste),
            store: RwLock::new(store),
            config,
            classifier: NoOpClassifier,
            extractor: FeatureExtractor::heuristic(),
            relational: RelationalBridge::default(),
        }
    }

    pub fn from_config(config: &TimbreConfig) -> Self {
        Self::new(config.taste.clone(), config.merger.clone())
    }
}

impl Default for VoiceMerger {
    fn default() -> Self {
        Self::new(TasteConfig::default(), MergerConfig::default())
    }
}

impl<C, T> VoiceMerger<C, T> {
    pub fn with_classifier<C2: IStanceClassifier>(self, classifier: C2) -> VoiceMerger<C2, T> {
        VoiceMerger {
            taste: self.taste,
            store: self.store,
            config: self.config,
            composer: self.composer,
            classifier,
            extractor: self.extractor,
            relational: self.relational,
        }
    }

    pub fn with_tagger<T2: IPosTagger>(self, tagger: T2) -> VoiceMerger<C, T2> {
        VoiceMerger {
            taste: self.taste,
            store: self.store,
            config: self.config,
            composer: self.composer,
            classifier: self.classifier,
            extractor: FeatureExtractor::new(tagger),
            relational: self.relational,
        }
    }

    /// Use chat-completion collaborators for both classification and
    /// tagging, sharing one credential pool.
    pub fn with_llm(
        self,
        config: &LlmConfig,
    ) -> TimbreResult<VoiceMerger<LlmStanceClassifier, LlmPosTagger>> {
        let backend = Arc::new(LlmBackend::from_config(config)?);
        if !backend.has_credentials() {
            warn!("LLM collaborators configured without credentials");
        }
        Ok(self
            .with_classifier(LlmStanceClassifier::new(backend.clone()))
            .with_tagger(LlmPosTagger::new(backend)))
    }

    pub fn with_relational(mut self, model: Arc<dyn IRelationalModel>) -> Self {
        self.relational = RelationalBridge::with_model(model);
        self
    }

    pub fn config(&self) -> &MergerConfig {
        &self.config
    }

    /// The user-authored base style as currently configured.
    pub fn taste(&self) -> TasteConfig {
        self.read_taste().clone()
    }

    /// Templates in effect as the base style.
    pub fn base_templates(&self) -> Vec<String> {
        self.read_taste().effective_templates()
    }

    /// Lexicon in effect as the base style.
    pub fn base_lexicon(&self) -> Lexicon {
        self.read_taste().effective_lexicon()
    }

    /// Copy of the bucket for `band`.
    pub fn bucket(&self, band: StanceBand) -> Bucket {
        self.read_store().bucket(band).clone()
    }

    // --- Generation ---

    /// Generation style for `agent_id` addressing `target_id`.
    ///
    /// The band comes from the relational model (neutral without one).
    /// Reads whatever bucket state is committed at call time.
    pub fn generation_config(
        &self,
        agent_id: Option<&str>,
        target_id: Option<&str>,
        fallback: Option<&GenerationFallback>,
    ) -> GenerationConfig {
        let band = self.relational.infer_band(agent_id, target_id);
        let (base_templates, base_lexicon) = self.effective_base();
        let bucket = self.bucket(band);
        self.composer
            .compose(band, &bucket, &base_templates, &base_lexicon, fallback)
    }

    // --- Diagnostics ---

    pub fn is_bucket_mature(&self, band: StanceBand) -> bool {
        is_mature(self.read_store().bucket(band), &self.config)
    }

    pub fn lex_details(&self, agent_id: Option<&str>, target_id: Option<&str>) -> LexDetails {
        let band = self.relational.infer_band(agent_id, target_id);
        let (base_templates, base_lexicon) = self.effective_base();
        LexDetails::from_bucket(band, &self.bucket(band), &base_templates, &base_lexicon)
    }

    pub fn debug_bucket(&self, band: StanceBand) -> DebugBucket {
        DebugBucket::from_bucket(band, self.read_store().bucket(band))
    }

    // --- Persistence ---

    pub fn export_snapshot(&self) -> MergerSnapshot {
        MergerSnapshot {
            buckets: self.read_store().snapshot(),
            cfg: SnapshotCfg::from(&self.config),
        }
    }

    /// Replace all three buckets. The snapshot's `cfg` is not applied.
    pub fn import_snapshot(&self, snapshot: MergerSnapshot) {
        self.replace_buckets(snapshot.buckets);
    }

    pub fn export_json(&self) -> TimbreResult<String> {
        Ok(serde_json::to_string(&self.export_snapshot())?)
    }

    /// Import a JSON snapshot. A document without a `buckets` object is
    /// ignored and returns `false`; unparseable JSON is an error and leaves
    /// state untouched.
    pub fn import_json(&self, raw: &str) -> TimbreResult<bool> {
        let value: Value = serde_json::from_str(raw)?;
        if !value.get("buckets").is_some_and(Value::is_object) {
            debug!("snapshot has no buckets, ignoring import");
            return Ok(false);
        }
        let snapshot: MergerSnapshot = serde_json::from_value(value)?;
        self.import_snapshot(snapshot);
        Ok(true)
    }

    fn replace_buckets(&self, buckets: BucketSet) {
        self.write_store().replace_all(buckets);
        info!("buckets replaced from snapshot");
    }

    // --- Overrides ---

    /// Fold persona overrides into the base style and re-seed every bucket
    /// from the result, discarding learned content. Does nothing and returns
    /// `false` when both overrides are absent.
    pub fn apply_overrides(
        &self,
        lexicon: Option<&LexiconOverride>,
        syntax: Option<&SyntaxOverride>,
    ) -> bool {
        if lexicon.is_none() && syntax.is_none() {
            return false;
        }
        let mut taste = self.write_taste();
        let merged_lexicon = merge_lexicon(&taste.effective_lexicon(), lexicon);
        let merged_templates = merge_templates(&taste.effective_templates(), syntax);
        *taste = TasteConfig::new(merged_templates, merged_lexicon);

        self.write_store()
            .reseed(&taste.effective_templates(), &taste.effective_lexicon());
        info!(
            templates = taste.templates.len(),
            tokens = taste.lexicon.total_len(),
            "persona overrides applied, buckets re-seeded"
        );
        true
    }

    pub fn apply_persona(&self, persona: &Persona) -> bool {
        self.apply_overrides(persona.lexicon.as_ref(), persona.syntax.as_ref())
    }

    /// Parse `{ lexicon?, syntax? }` and apply it.
    pub fn apply_persona_value(&self, persona: &Value) -> bool {
        self.apply_persona(&Persona::from_value(persona))
    }

    // --- Locking ---

    fn effective_base(&self) -> (Vec<String>, Lexicon) {
        let taste = self.read_taste();
        (taste.effective_templates(), taste.effective_lexicon())
    }

    fn read_taste(&self) -> RwLockReadGuard<'_, TasteConfig> {
        self.taste.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_taste(&self) -> RwLockWriteGuard<'_, TasteConfig> {
        self.taste.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn read_store(&self) -> RwLockReadGuard<'_, BucketStore> {
        self.store.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_store(&self) -> RwLockWriteGuard<'_, BucketStore> {
        self.store.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<C: IStanceClassifier, T: IPosTagger> VoiceMerger<C, T> {
    /// Classify, extract, store, then nudge relational state.
    ///
    /// Blank text returns `None` and touches nothing. Collaborator failures
    /// fall back (neutral stance, heuristic extraction, skipped nudge).
    pub async fn observe_utterance(&self, utterance: &Utterance) -> Option<Observation> {
        if utterance.is_blank() {
            return None;
        }
        let text = utterance.text.as_str();

        let stance = self.classify(text).await;
        let outcome = self.extractor.extract(text).await;
        let stored = self.write_store().store(stance, &outcome.extraction);
        if stored.is_noop() {
            debug!(stance = %stance, path = ?outcome.path, "utterance held nothing new");
        } else {
            debug!(
                stance = %stance,
                path = ?outcome.path,
                template_added = stored.template_added,
                tokens_added = stored.tokens_added,
                "utterance observed"
            );
        }

        if let Some((speaker_id, target_id)) = utterance.participants() {
            self.relational.nudge(
                stance,
                utterance.direction,
                speaker_id,
                target_id,
                utterance.score,
            );
        }

        Some(Observation {
            stance,
            template: outcome.extraction.template,
            lexicon: outcome.extraction.lexicon,
        })
    }

    /// Stance band for `text`; classifier failure is neutral.
    pub async fn classify(&self, text: &str) -> StanceBand {
        let label = match self.classifier.classify(text).await {
            Ok(label) => Some(label),
            Err(e) => {
                warn!(error = %e, "stance classification failed, using neutral");
                None
            }
        };
        normalize_optional(label.as_deref())
    }
}

impl<C, T> std::fmt::Debug for VoiceMerger<C, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VoiceMerger")
            .field("config", &self.config)
            .field("relational", &self.relational)
            .finish_non_exhaustive()
    }
}
