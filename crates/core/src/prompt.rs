// crates/core/src/prompt.rs
//! Fixed instruction template for ICD-10 classification.
//!
//! The template is German and asks the model for the most specific code(s)
//! in a bracketed `ICD-10 Code(s): [...]` format. The condition text is
//! embedded verbatim: no escaping, no truncation, no validation.

/// Build the classification prompt for one condition description.
///
/// Deterministic: the same input always yields byte-identical output.
pub fn build_classification_prompt(condition: &str) -> String {
    format!(
        r#"Du bist ein spezialisierter KI-Assistent für medizinische Klassifikationen, insbesondere das ICD-10-System.

Deine Aufgabe ist es, die folgende medizinische Bedingung in den **genauesten ICD-10-Code(s)** einzustufen.

**Regeln:**
- Falls eine **spezifische Unterkategorie existiert**, verwende diese (z. B. "Asthma" → "J45.9" statt nur "J45").
- Falls mehrere Bedingungen existieren, **gib alle relevanten Codes** an (z. B. "ADHS und Asthma" → "F98.80, J45.9").
- Gib das Ergebnis ausschließlich im **folgenden Format** zurück:

**Format:**
```
ICD-10 Code(s): [Code1, Code2, ...]
```

**Jetzt klassifiziere diese Bedingung:**
**Bedingung:** "{}"
"#,
        condition
    )
}
