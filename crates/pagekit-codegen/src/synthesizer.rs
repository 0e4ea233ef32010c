//! Request orchestration.
//!
//! The [`Synthesizer`] resolves a request's archetype and target, asks the
//! body registry for the page body and hands it to the target's assembler.

use pagekit_catalog::{BodyContext, BodyRegistry, SnippetRegistry};
use pagekit_core::{ArchetypeName, CoreError, DesignContext, Node, Target};
use serde::Serialize;

use crate::assemblers::{
    AngularAssembler, Assembler, AssemblyContext, Body, GeneratedFile, HtmlAssembler,
    PageSource, ReactAssembler, SvelteAssembler, VueAssembler,
};
use crate::error::Result;
use crate::request::{FallbackPolicy, SynthesisOptions, SynthesisRequest};

/// Files produced for a request, together with the size of the snippet
/// corpus that was available while producing them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesisReport {
    pub files: Vec<GeneratedFile>,
    pub corpus_size: usize,
}

/// Turns synthesis requests into generated files.
///
/// A synthesizer is immutable once built and can be shared across threads.
pub struct Synthesizer {
    catalog: BodyRegistry,
    options: SynthesisOptions,
    react: ReactAssembler<'static>,
    nextjs: ReactAssembler<'static>,
    vue: VueAssembler<'static>,
    angular: AngularAssembler<'static>,
    svelte: SvelteAssembler<'static>,
    html: HtmlAssembler<'static>,
}

impl Synthesizer {
    /// Create a synthesizer with the standard catalog and default options.
    pub fn new() -> Self {
        Self::with_options(SynthesisOptions::default())
    }

    /// Create a synthesizer with the standard catalog.
    pub fn with_options(options: SynthesisOptions) -> Self {
        Self::build(BodyRegistry::standard(), options)
    }

    /// Create a synthesizer around a custom catalog.
    ///
    /// Fails if any archetype lacks a body producer.
    pub fn with_catalog(catalog: BodyRegistry, options: SynthesisOptions) -> Result<Self> {
        catalog.validate()?;
        Ok(Self::build(catalog, options))
    }

    fn build(catalog: BodyRegistry, options: SynthesisOptions) -> Self {
        Self {
            catalog,
            options,
            react: ReactAssembler::react(),
            nextjs: ReactAssembler::nextjs(),
            vue: VueAssembler::new(),
            angular: AngularAssembler::new(),
            svelte: SvelteAssembler::new(),
            html: HtmlAssembler::new(),
        }
    }

    /// Options this synthesizer was built with.
    pub fn options(&self) -> &SynthesisOptions {
        &self.options
    }

    /// Body catalog in use.
    pub fn catalog(&self) -> &BodyRegistry {
        &self.catalog
    }

    /// Assembler for a target.
    pub fn assembler(&self, target: Target) -> &dyn Assembler {
        match target {
            Target::React => &self.react,
            Target::Nextjs => &self.nextjs,
            Target::Vue => &self.vue,
            Target::Angular => &self.angular,
            Target::Svelte => &self.svelte,
            Target::Html => &self.html,
        }
    }

    /// Resolve a raw archetype name under the fallback policy.
    pub fn resolve_archetype(&self, name: &str) -> Result<ArchetypeName> {
        let archetype = ArchetypeName::parse(name);
        if archetype.known().is_none() {
            match self.options.fallback {
                FallbackPolicy::Strict => {
                    return Err(CoreError::UnknownArchetype(name.to_string()).into())
                }
                FallbackPolicy::Lenient => {
                    tracing::warn!(archetype = name, "Unknown archetype, using placeholder body");
                }
            }
        }
        Ok(archetype)
    }

    /// Resolve a raw target name under the fallback policy.
    pub fn resolve_target(&self, name: &str) -> Result<Target> {
        match name.parse::<Target>() {
            Ok(target) => Ok(target),
            Err(err) => match self.options.fallback {
                FallbackPolicy::Strict => Err(err.into()),
                FallbackPolicy::Lenient => {
                    tracing::warn!(framework = name, "Unknown target, using react");
                    Ok(Target::React)
                }
            },
        }
    }

    /// Synthesize the page file for a request.
    ///
    /// Always yields exactly one file unless the strict fallback policy
    /// rejects the request.
    pub fn synthesize(&self, request: &SynthesisRequest) -> Result<Vec<GeneratedFile>> {
        let archetype = self.resolve_archetype(&request.archetype)?;
        let target = self.resolve_target(&request.target)?;
        let body_ctx = BodyContext::new(request.app_name.clone(), request.dark_mode);
        let file = self.synthesize_page(&archetype, target, &body_ctx, &request.design)?;
        Ok(vec![file])
    }

    /// Synthesize one page for an already resolved archetype and target.
    pub fn synthesize_page(
        &self,
        archetype: &ArchetypeName,
        target: Target,
        body_ctx: &BodyContext,
        design: &DesignContext,
    ) -> Result<GeneratedFile> {
        let body: Node = self.catalog.produce(archetype, body_ctx);
        let file = self.assemble(target, archetype.as_str(), Body::Tree(&body), body_ctx, design)?;
        tracing::debug!(
            archetype = %archetype,
            framework = %target,
            path = %file.path,
            dark_mode = body_ctx.dark_mode,
            "Synthesized page"
        );
        Ok(file)
    }

    /// Wrap arbitrary neutral markup in a target file.
    ///
    /// `name` drives identifiers and the output path the same way an
    /// archetype name does.
    pub fn assemble_markup(
        &self,
        target: Target,
        name: &str,
        markup: &str,
        body_ctx: &BodyContext,
        design: &DesignContext,
    ) -> Result<GeneratedFile> {
        let file = self.assemble(target, name, Body::Markup(markup), body_ctx, design)?;
        tracing::debug!(name, framework = %target, path = %file.path, "Assembled markup");
        Ok(file)
    }

    /// Synthesize a request after making sure the snippet registry is ready.
    pub fn synthesize_with_registry(
        &self,
        request: &SynthesisRequest,
        registry: &mut dyn SnippetRegistry,
    ) -> Result<SynthesisReport> {
        registry.initialize();
        let corpus_size = registry.len();
        tracing::debug!(corpus_size, "Snippet registry ready");
        let files = self.synthesize(request)?;
        Ok(SynthesisReport { files, corpus_size })
    }

    fn assemble(
        &self,
        target: Target,
        name: &str,
        body: Body<'_>,
        body_ctx: &BodyContext,
        design: &DesignContext,
    ) -> Result<GeneratedFile> {
        let page = PageSource { name, body };
        let ctx = AssemblyContext {
            app_name: &body_ctx.app_name,
            dark_mode: body_ctx.dark_mode,
            design,
            typescript: self.options.typescript,
        };
        self.assembler(target).assemble(&page, &ctx)
    }
}

impl Default for Synthesizer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Synthesizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Synthesizer")
            .field("catalog", &self.catalog)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
