//! The AI provider catalog.
//!
//! Static reference data about the supported text-generation providers.
//! Nothing in this crate calls these endpoints; the catalog exists so the
//! CLI can list providers, name the document generator, and tell users
//! which env var to set for which service.

use serde::Serialize;

/// One entry in the provider catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Provider {
    /// Catalog id, used in file stems and CLI flags.
    pub id: &'static str,

    /// Display name, shown in the document's "Generated by" row.
    pub name: &'static str,

    /// Chat/completions endpoint for the provider API.
    pub endpoint: &'static str,

    /// Env var holding the provider API key (never the key itself).
    pub api_key_env: &'static str,

    /// Where to create an API key.
    pub key_url: &'static str,

    /// List price per million tokens, free text.
    pub cost_per_1m_tokens: &'static str,

    /// Approximate cost per generated script.
    pub cost_info: &'static str,

    /// Model ids selectable for this provider.
    pub models: &'static [&'static str],
}

/// Supported providers in display order. The first entry is the default.
pub static CATALOG: &[Provider] = &[
    Provider {
        id: "gemini",
        name: "Google Gemini",
        endpoint: "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent",
        api_key_env: "GEMINI_API_KEY",
        key_url: "https://makersuite.google.com/app/apikey",
        cost_per_1m_tokens: "$0.50",
        cost_info: "Low cost - ~$0.001 per script",
        models: &[
            "gemini-2.0-flash-exp",
            "gemini-1.5-pro",
            "gemini-1.5-flash",
            "gemini-pro",
        ],
    },
    Provider {
        id: "openai",
        name: "OpenAI ChatGPT",
        endpoint: "https://api.openai.com/v1/chat/completions",
        api_key_env: "OPENAI_API_KEY",
        key_url: "https://platform.openai.com/api-keys",
        cost_per_1m_tokens: "$10.00",
        cost_info: "High cost - ~$0.02 per script",
        models: &["gpt-4o", "gpt-4o-mini", "gpt-4-turbo", "gpt-3.5-turbo"],
    },
    Provider {
        id: "claude",
        name: "Anthropic Claude",
        endpoint: "https://api.anthropic.com/v1/messages",
        api_key_env: "CLAUDE_API_KEY",
        key_url: "https://console.anthropic.com/",
        cost_per_1m_tokens: "$3.00",
        cost_info: "Medium cost - ~$0.006 per script",
        models: &[
            "claude-sonnet-4-5",
            "claude-opus-4-1",
            "claude-3-7-sonnet",
            "claude-3-5-haiku",
        ],
    },
    Provider {
        id: "grok",
        name: "Grok (X.AI)",
        endpoint: "https://api.x.ai/v1/chat/completions",
        api_key_env: "GROK_API_KEY",
        key_url: "https://console.x.ai/",
        cost_per_1m_tokens: "$5.00",
        cost_info: "Medium cost - ~$0.01 per script",
        models: &["grok-3", "grok-2", "grok-beta"],
    },
    Provider {
        id: "mistral",
        name: "Mistral AI",
        endpoint: "https://api.mistral.ai/v1/chat/completions",
        api_key_env: "MISTRAL_API_KEY",
        key_url: "https://console.mistral.ai/",
        cost_per_1m_tokens: "$4.00",
        cost_info: "Medium cost - ~$0.008 per script",
        models: &["mistral-large", "mistral-medium", "mistral-small", "mistral-tiny"],
    },
    Provider {
        id: "deepseek",
        name: "DeepSeek",
        endpoint: "https://api.deepseek.com/v1/chat/completions",
        api_key_env: "DEEPSEEK_API_KEY",
        key_url: "https://platform.deepseek.com/api_keys",
        cost_per_1m_tokens: "$0.14",
        cost_info: "Very low cost - ~$0.0003 per script",
        models: &["deepseek-chat", "deepseek-coder", "deepseek-v3"],
    },
    Provider {
        id: "perplexity",
        name: "Perplexity",
        endpoint: "https://api.perplexity.ai/chat/completions",
        api_key_env: "PERPLEXITY_API_KEY",
        key_url: "https://www.perplexity.ai/settings/api",
        cost_per_1m_tokens: "$1.00",
        cost_info: "Low cost - ~$0.002 per script",
        models: &[
            "llama-3.1-sonar-large",
            "llama-3.1-sonar-small",
            "llama-3.1-sonar-huge",
        ],
    },
    Provider {
        id: "copilot",
        name: "GitHub Copilot",
        endpoint: "https://api.githubcopilot.com/chat/completions",
        api_key_env: "COPILOT_API_KEY",
        key_url: "https://github.com/settings/copilot",
        cost_per_1m_tokens: "Subscription",
        cost_info: "Monthly plan - included in the subscription",
        models: &["gpt-4", "gpt-3.5-turbo"],
    },
    Provider {
        id: "microsoft-copilot",
        name: "Microsoft Copilot (Azure)",
        endpoint: "https://YOUR-RESOURCE.openai.azure.com/openai/deployments/YOUR-DEPLOYMENT/chat/completions",
        api_key_env: "MICROSOFT_COPILOT_API_KEY",
        key_url: "https://portal.azure.com/",
        cost_per_1m_tokens: "Variable",
        cost_info: "Depends on the Azure deployment",
        models: &["gpt-4", "gpt-4-turbo", "gpt-35-turbo"],
    },
    Provider {
        id: "meta",
        name: "Meta AI (Llama)",
        endpoint: "https://api.together.xyz/v1/chat/completions",
        api_key_env: "META_API_KEY",
        key_url: "https://www.together.ai/products",
        cost_per_1m_tokens: "$0.60",
        cost_info: "Low cost - ~$0.0012 per script",
        models: &["llama-3.3-70b", "llama-3.1-405b", "llama-3.1-70b", "llama-3.1-8b"],
    },
];

/// All providers in catalog order.
pub fn all() -> &'static [Provider] {
    CATALOG
}

/// Look up a provider by catalog id.
pub fn find(id: &str) -> Option<&'static Provider> {
    CATALOG.iter().find(|p| p.id == id)
}

/// The default provider (first catalog entry).
pub fn default_provider() -> &'static Provider {
    &CATALOG[0]
}
