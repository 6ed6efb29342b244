//! The compiled-in template registry.

/// A named, parameterized prompt blueprint.
///
/// Immutable; defined once at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptTemplate {
    /// Unique registry key.
    pub name: &'static str,
    /// Required substitution keys.
    pub parameters: &'static [&'static str],
    /// Body text with `{parameter}` placeholders.
    pub body: &'static str,
}

const CODE_PARAMS: &[&str] = &["language", "code"];

pub(crate) const TEMPLATES: &[PromptTemplate] = &[
    PromptTemplate {
        name: "code_explainer",
        parameters: CODE_PARAMS,
        body: "You are an experienced programmer.\n\n\
               Explain the following code in plain language:\n\
               ```{language}\n{code}\n```\n\n\
               The explanation should be understandable to a beginner.",
    },
    PromptTemplate {
        name: "code_reviewer",
        parameters: CODE_PARAMS,
        body: "You are a code reviewer.\n\n\
               Analyze this code:\n\
               ```{language}\n{code}\n```\n\n\
               Look for:\n\
               1. Potential bugs\n\
               2. Performance problems\n\
               3. Violations of best practices\n\n\
               Suggest improvements.",
    },
    PromptTemplate {
        name: "test_generator",
        parameters: CODE_PARAMS,
        body: "You are a software tester.\n\n\
               Generate unit tests for the following code:\n\
               ```{language}\n{code}\n```\n\n\
               The tests should cover the main usage scenarios.",
    },
    PromptTemplate {
        name: "refactorer",
        parameters: CODE_PARAMS,
        body: "You are an experienced developer.\n\n\
               Refactor the following code:\n\
               ```{language}\n{code}\n```\n\n\
               The changes should improve readability and performance.",
    },
    PromptTemplate {
        name: "documenter",
        parameters: CODE_PARAMS,
        body: "You are a technical writer.\n\n\
               Generate documentation comments for the following code:\n\
               ```{language}\n{code}\n```\n\n\
               The documentation should be thorough and follow the \
               conventions of the language.",
    },
];
