//! Fixed instructions sent to the hosted models.

use crate::domain::model::GenerationParams;

/// Sent to the vision model on every request to accept its usage agreement.
pub const LICENSE_AGREEMENT_PROMPT: &str = "agree";

pub const OCR_PARAMS: GenerationParams = GenerationParams {
    temperature: 0.0,
    max_tokens: 2000,
};

pub const SOLVER_PARAMS: GenerationParams = GenerationParams {
    temperature: 0.1,
    max_tokens: 1500,
};

/// Transcription-only instructions. The model is never asked for a
/// `CLEAN_QUESTION:` section, so question extraction usually falls back to
/// the full text.
pub const OCR_PROMPT: &str = "Classify this image as one of:
- PHYSICS_DIAGRAM
- CHEMISTRY_DIAGRAM
- PURE_MATH
- TEXT_ONLY
Return only the label.

You are a PHYSICS OCR ENGINE, NOT A SOLVER.

ABSOLUTE RULES:
- DO NOT interpret meaning
- DO NOT infer physics
- DO NOT simplify
- DO NOT rename variables

SCAN THE IMAGE IN 4 PASSES:
PASS 1: Printed question text
PASS 2: Diagram objects
PASS 3: Diagram labels
PASS 4: Options (A\u{2013}D)

Output format:
RAW_TEXT:
DIAGRAM_OBJECTS:
DIAGRAM_LABELS:
OPTIONS:

You are a CHEMISTRY MCQ STRUCTURE TRANSCRIBER.
Describe each option structure exactly as drawn.

You are a MATHEMATICAL OCR ENGINE.
Transcribe symbols exactly.

RAW_TEXT:
EQUATIONS:";

pub fn solver_prompt(clean_question: &str) -> String {
    format!(
        "You are a UNIVERSAL STEM SOLVER.

MATH SAFETY RULES:
- Never expand (a \u{00b1} b)^x unless x is a known integer.
- Verify identities by substitution.

PHYSICS SAFETY RULES:
- Magnetic field + conductor + resistance implies electromagnetic damping.

QUESTION:
{clean_question}

DERIVATION STEPS:
Step 1:
$$ <governing equation> $$
Step 2:
$$ <definitions> $$
Step 3:
$$ <simplification> $$
Step 4:
$$ <required quantity> $$
Step 5:
$$ <substitution> $$

ANSWER:
Final Answer:
- Value with units
- If MCQ: Correct Option (A/B/C/D)"
    )
    .trim()
    .to_string()
}
