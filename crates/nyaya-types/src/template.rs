//! Versioned prompt template store.
//!
//! Every fixed piece of prompt text -- the system instruction, the
//! repository-analysis instruction, the greeting, and the three canned
//! demo-mode paragraphs -- lives here as enumerated configuration data
//! rather than as inline literals at call sites, so each template can be
//! tested and revised independently.

use serde::{Deserialize, Serialize};

use std::fmt;

/// Placeholder interpolated by [`Template::render_query`].
pub const QUERY_SLOT: &str = "{query}";

/// Identifier for a prompt template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateId {
    /// System instruction for the live chat path.
    LegalAssistant,
    /// System instruction for repository analysis.
    RepoAnalysis,
    /// Assistant greeting seeded into every new conversation.
    Greeting,
    /// Canned reply for FIR / police-complaint queries.
    FirProcedure,
    /// Canned reply for landlord/tenant/rent/eviction queries.
    TenancyGuidance,
    /// Canned fallback with one `{query}` interpolation slot.
    GeneralGuidance,
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TemplateId::LegalAssistant => "legal_assistant",
            TemplateId::RepoAnalysis => "repo_analysis",
            TemplateId::Greeting => "greeting",
            TemplateId::FirProcedure => "fir_procedure",
            TemplateId::TenancyGuidance => "tenancy_guidance",
            TemplateId::GeneralGuidance => "general_guidance",
        };
        write!(f, "{name}")
    }
}

impl TemplateId {
    /// All registered template ids.
    pub const ALL: [TemplateId; 6] = [
        TemplateId::LegalAssistant,
        TemplateId::RepoAnalysis,
        TemplateId::Greeting,
        TemplateId::FirProcedure,
        TemplateId::TenancyGuidance,
        TemplateId::GeneralGuidance,
    ];
}

/// One versioned prompt template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    pub id: TemplateId,
    pub version: u16,
    pub text: &'static str,
}

impl Template {
    /// Interpolate the query into the `{query}` slot, exactly once.
    ///
    /// Templates without the slot are returned unchanged.
    pub fn render_query(&self, query: &str) -> String {
        self.text.replacen(QUERY_SLOT, query, 1)
    }
}

/// Look up a template by id. Total: every id is registered.
pub fn template(id: TemplateId) -> &'static Template {
    match id {
        TemplateId::LegalAssistant => &LEGAL_ASSISTANT,
        TemplateId::RepoAnalysis => &REPO_ANALYSIS,
        TemplateId::Greeting => &GREETING,
        TemplateId::FirProcedure => &FIR_PROCEDURE,
        TemplateId::TenancyGuidance => &TENANCY_GUIDANCE,
        TemplateId::GeneralGuidance => &GENERAL_GUIDANCE,
    }
}

static LEGAL_ASSISTANT: Template = Template {
    id: TemplateId::LegalAssistant,
    version: 1,
    text: r#"You are "NyayaBot," an expert AI legal assistant specializing in Indian Judiciary Law. Respond to users' legal queries with the accuracy, clarity, and professionalism of a seasoned Indian lawyer. Provide concise, reliable, and up-to-date information on Indian laws, court procedures, and legal rights.

Your knowledge covers:
1. Indian Legal System - Constitution, judiciary structure, landmark cases
2. Criminal Laws - IPC, CrPC, Evidence Act, FIR procedures
3. Civil Laws - CPC, Contract Act, Property laws, tenancy rights
4. Family Laws - Marriage, divorce, maintenance across different personal laws
5. Consumer Protection - Rights, complaint procedures, remedies
6. Constitutional Rights - Fundamental rights, remedies, enforcement

Always follow these guidelines:
1. Begin with a clear, direct answer to the legal question
2. Provide relevant legal context and background
3. Explain applicable laws, statutes, or precedents
4. Use plain language with necessary legal terms explained
5. Include citations to relevant statutes or case law when appropriate
6. Suggest potential next steps or resources

Always end your response with this disclaimer: "Please note that this information is provided for educational purposes only and does not constitute legal advice. For specific legal concerns, please consult with a qualified legal professional who can provide personalized guidance based on your particular situation."

For complex matters, use this enhanced disclaimer: "This matter involves complex legal considerations that may require professional legal representation. The information provided is general in nature, and I strongly recommend consulting with a qualified advocate who specializes in this area of law for personalized advice.""#,
};

static REPO_ANALYSIS: Template = Template {
    id: TemplateId::RepoAnalysis,
    version: 1,
    text: r#"You are "NyayaBot," an expert AI legal assistant evaluating software repositories for their relevance to legal-technology work in India.

Given a repository's metadata and README excerpt, provide:
1. A short summary of what the project does
2. An assessment of its relevance to legal practice or legal-tech (case management, document automation, legal research, compliance, court data)
3. Notable features or limitations visible from the metadata
4. Potential applications for Indian legal professionals, if any

Be factual and concise. If the project has no plausible legal application, say so plainly.

Always end your response with this disclaimer: "Please note that this information is provided for educational purposes only and does not constitute legal advice. For specific legal concerns, please consult with a qualified legal professional who can provide personalized guidance based on your particular situation.""#,
};

static GREETING: Template = Template {
    id: TemplateId::Greeting,
    version: 1,
    text: "Hello! I am NyayaBot, an expert AI legal assistant specializing in Indian Judiciary Law. How can I help you today?",
};

static FIR_PROCEDURE: Template = Template {
    id: TemplateId::FirProcedure,
    version: 1,
    text: r#"An FIR (First Information Report) can be filed at any police station by visiting in person, submitting a written complaint, or in some cases, filing online through state police portals.

The process typically involves:
1. Approaching the police station with jurisdiction over the area where the crime occurred
2. Providing details of the incident to the officer in charge
3. The officer will record your statement and register the FIR under Section 154 of the Criminal Procedure Code, 1973
4. You should receive a free copy of the FIR

If the police refuse to register your FIR, you have legal remedies including:
- Approaching a senior police officer
- Filing a complaint directly to the Judicial Magistrate under Section 156(3) CrPC
- Filing a writ petition in the High Court

Please note that this information is provided for educational purposes only and does not constitute legal advice. For specific legal concerns, please consult with a qualified legal professional who can provide personalized guidance based on your particular situation."#,
};

static TENANCY_GUIDANCE: Template = Template {
    id: TemplateId::TenancyGuidance,
    version: 1,
    text: r#"In India, landlord-tenant relationships are primarily governed by state-specific Rent Control Acts. A landlord cannot legally evict a tenant without proper notice and following due process under the applicable Rent Control Act.

A landlord must typically provide a valid reason for eviction as specified in the relevant Act, such as:
- Non-payment of rent
- Subletting without permission
- Using the premises for purposes other than those agreed upon
- Causing damage to the property
- The landlord requiring the premises for personal use

Even with valid grounds, the landlord must:
1. Serve a legal notice specifying the reason for eviction
2. File an eviction petition in the Rent Controller's court
3. Obtain a court order before attempting to evict you

This matter involves complex legal considerations that may require professional legal representation. The information provided is general in nature, and I strongly recommend consulting with a qualified advocate who specializes in this area of law for personalized advice."#,
};

static GENERAL_GUIDANCE: Template = Template {
    id: TemplateId::GeneralGuidance,
    version: 1,
    text: r#"Thank you for your question about "{query}". To provide you with accurate information, I would need to understand more specific details about your legal concern.

Indian law covers various domains including constitutional law, criminal law, civil law, family law, property law, and more. Each area has specific statutes, procedures, and case precedents.

Please feel free to ask more specific questions about your legal concern, and I'll do my best to provide relevant information.

Please note that this information is provided for educational purposes only and does not constitute legal advice. For specific legal concerns, please consult with a qualified legal professional who can provide personalized guidance based on your particular situation."#,
};
