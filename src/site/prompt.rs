//! Prompt construction for triage and generation.
//!
//! Prompt text is data: the interesting guarantees live in the extraction
//! fallbacks, not here. Output-format instructions in these prompts must
//! stay in sync with `extract` (section markers, JSON keys).

use super::types::SiteClassification;

/// Static reply sent when triage decides the request is too vague to build
/// from. User-facing copy, served verbatim to the (Portuguese) frontend.
pub const ASK_DETAILS_MESSAGE: &str = "\
🤔 Para criar o site perfeito, preciso saber:

1️⃣ **Tipo de site**: Landing page? Portfolio? Dashboard? E-commerce?
2️⃣ **Estilo visual**: Moderno? Minimalista? Dark mode? Glassmorphism?
3️⃣ **Recursos**: Animações? Formulários? Carrossel? Menu hambúrguer?
4️⃣ **Tecnologia**: HTML/CSS/JS ou React?
5️⃣ **Cores preferidas**: Azul? Roxo? Gradientes? Dark?

Exemplo: \"Crie uma landing page moderna com gradientes roxos, animações suaves, formulário de contato e menu hambúrguer\"
";

const TRIAGE_PROMPT: &str = "\
You are the triage stage of an expert full-stack web development assistant.

Analyze the user's website request and return ONLY a JSON object with this exact structure:
{
  \"site_type\": \"LANDING_PAGE\" | \"PORTFOLIO\" | \"DASHBOARD\" | \"E_COMMERCE\" | \"BLOG\" | \"CORPORATE\" | \"CUSTOM\",
  \"technology\": \"HTML_CSS_JS\" | \"REACT\" | \"BOTH\",
  \"complexity\": \"SIMPLE\" | \"INTERMEDIATE\" | \"ADVANCED\",
  \"features\": [\"animations\", \"responsive\", \"dark_mode\", \"forms\", \"carousel\", \"hamburger_menu\", ...],
  \"design_style\": \"MODERN\" | \"MINIMALIST\" | \"GLASSMORPHISM\" | \"GRADIENT\" | \"NEUMORPHISM\" | \"DARK\",
  \"decision\": \"CREATE_SITE\" | \"ASK_DETAILS\" | \"EXPLAIN_CONCEPT\",
  \"needs_react\": true | false
}

SITE TYPES:
- LANDING_PAGE: single conversion/presentation page
- PORTFOLIO: personal or professional portfolio
- DASHBOARD: admin or data panel
- E_COMMERCE: online store
- BLOG: blog/articles
- CORPORATE: institutional site
- CUSTOM: anything else

DESIGN STYLES:
- MODERN: clean, spaced, subtle gradients
- MINIMALIST: whitespace, strong typography
- GLASSMORPHISM: frosted-glass effects
- GRADIENT: vibrant, bold gradients
- NEUMORPHISM: soft shadows, depth
- DARK: dark mode first, neon accents

DECISION:
- CREATE_SITE: the request describes something buildable
- ASK_DETAILS: the request is too vague to build from
- EXPLAIN_CONCEPT: the user is asking a question, not asking for a site

Set needs_react to true only when the request calls for a React component
rather than a plain HTML/CSS/JS page.
";

/// System prompt for the generation calls: who the model is and what
/// quality bar its output must meet
pub const WEBDEV_SYSTEM_PROMPT: &str = "\
You are an expert full-stack web developer and UI designer.

SPECIALTIES:
- Semantic, accessible HTML5
- Advanced CSS3 (Grid, Flexbox, animations, transforms, backdrop-filter)
- Modern vanilla JavaScript (ES6+, Fetch API, Intersection Observer)
- React with hooks (useState, useEffect, useRef)
- Responsive, mobile-first layouts
- Professional color palettes and typography

DESIGN PRINCIPLES:
- Generous, breathable spacing (8pt system; sections 80-120px vertical)
- Clear typographic hierarchy; body text never below 16px
- At least three colors (primary, secondary, accent); gradients on CTAs
- Subtle micro-animations and smooth transitions (ease-in-out)
- Soft shadows for depth; border-radius 16-24px on cards
- Dark mode and glassmorphism when the style calls for them
- Mobile-first media queries at 640px, 768px, 1024px, 1280px

CODE REQUIREMENTS:
- Always produce complete, functional code - no placeholders, no lorem ipsum
- Semantic structure: <header>, <nav>, <main>, <section>, <footer>
- CSS organized with variables, reset, components
- Hover states and scroll animations included by default
- No external libraries beyond React when requested
";

/// Builds the triage system prompt
pub fn create_triage_system_prompt() -> anyhow::Result<String> {
    let schema = schemars::schema_for!(SiteClassification);
    let schema_str = serde_json::to_string_pretty(&schema)?;

    let mut prompt = String::from(TRIAGE_PROMPT);
    prompt.push_str("\nYour response must validate against this JSON schema:\n\n");
    prompt.push_str(&schema_str);

    Ok(prompt)
}

/// Builds the user prompt for the HTML/CSS/JS generation branch
pub fn create_markup_user_prompt(request: &str, classification: &SiteClassification) -> String {
    format!(
        "USER REQUEST: {request}\n\n\
        TECHNICAL SPECIFICATIONS:\n\
        - Site type: {}\n\
        - Design style: {}\n\
        - Required features: {}\n\n\
        Create a COMPLETE, functional site with separate HTML, CSS and JavaScript.\n\n\
        IMPORTANT: output ONLY code, no prose before or after, in exactly this format:\n\n\
        [HTML]\n\
        <!DOCTYPE html>\n\
        <html>\n\
        ...complete HTML...\n\
        </html>\n\n\
        [CSS]\n\
        /* complete CSS */\n\
        ...\n\n\
        [JS]\n\
        // JavaScript (if needed)\n\
        ...\n\n\
        [EXPLANATION]\n\
        Brief description of the implemented functionality.",
        classification.site_type,
        classification.design_style,
        classification.features.join(", "),
    )
}

/// Builds the user prompt for the React component generation branch
pub fn create_component_user_prompt(request: &str, classification: &SiteClassification) -> String {
    format!(
        "USER REQUEST: {request}\n\n\
        SPECIFICATIONS:\n\
        - Type: {}\n\
        - Style: {}\n\
        - Features: {}\n\n\
        Create a professional, modern React component.\n\n\
        Return a single JSON object in this format:\n\
        {{\n\
        \x20 \"react\": \"complete JSX source of the component\",\n\
        \x20 \"css\": \"CSS/styled-components source\",\n\
        \x20 \"explanation\": \"how to use the component\"\n\
        }}\n\n\
        REQUIREMENTS:\n\
        1. Functional component with hooks\n\
        2. State managed with useState/useEffect\n\
        3. Clean, modular code",
        classification.site_type,
        classification.design_style,
        classification.features.join(", "),
    )
}

/// Builds the user prompt for the concept-explanation branch
pub fn create_explain_user_prompt(request: &str) -> String {
    format!(
        "The user wants to understand a web development concept.\n\n\
        QUESTION: {request}\n\n\
        Explain clearly and practically, with code examples where they help.\n\
        Be didactic but professional."
    )
}
