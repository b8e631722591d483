//! Recursive step tree rendering. A step list becomes an ordered list of
//! entries, each carrying its instruction text and a nested list of the
//! same shape for its substeps. No depth cap; the `Step` tree is owned
//! and acyclic by construction, so recursion always terminates.

use serde::Serialize;

use crate::highlight::HighlightedText;
use crate::model::Step;

/// One entry of the rendered hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedStep {
    pub text: HighlightedText,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub substeps: Vec<RenderedStep>,
}

/// Render a step list without annotation.
pub fn render(steps: &[Step]) -> Vec<RenderedStep> {
    render_with(steps, &|text| HighlightedText::plain(text))
}

/// Render a step list, applying `transform` to each instruction text.
/// The transform touches text only; nesting structure and order are
/// exactly those of the source.
pub fn render_with<F>(steps: &[Step], transform: &F) -> Vec<RenderedStep>
where
    F: Fn(&str) -> HighlightedText,
{
    steps
        .iter()
        .map(|step| RenderedStep {
            text: transform(step.text()),
            substeps: render_with(step.substeps(), transform),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::highlight;

    fn leaf(text: &str) -> Step {
        Step::Leaf(text.to_string())
    }

    #[test]
    fn leaf_list_renders_flat() {
        let steps = vec![leaf("Boil pasta"), leaf("Cook sauce"), leaf("Mix together")];
        let out = render(&steps);
        assert_eq!(out.len(), 3);
        assert!(out.iter().all(|s| s.substeps.is_empty()));
        assert_eq!(out[0].text.raw(), "Boil pasta");
        assert_eq!(out[2].text.raw(), "Mix together");
    }

    #[test]
    fn composite_step_nests_one_level_deeper() {
        let steps = vec![Step::Group {
            text: "Prepare sauce".to_string(),
            substeps: vec![leaf("Chop onion"), leaf("Simmer 20 min")],
        }];
        let out = render(&steps);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].text.raw(), "Prepare sauce");
        assert_eq!(out[0].substeps.len(), 2);
        assert_eq!(out[0].substeps[1].text.raw(), "Simmer 20 min");
    }

    #[test]
    fn deep_nesting_preserves_order_at_every_level() {
        // Three levels: group > group > leaves
        let steps = vec![Step::Group {
            text: "Assemble".to_string(),
            substeps: vec![
                leaf("Preheat oven"),
                Step::Group {
                    text: "Layer".to_string(),
                    substeps: vec![leaf("Sauce first"), leaf("Then pasta"), leaf("Then cheese")],
                },
            ],
        }];
        let out = render(&steps);
        let layer = &out[0].substeps[1];
        assert_eq!(layer.text.raw(), "Layer");
        let texts: Vec<String> = layer.substeps.iter().map(|s| s.text.raw()).collect();
        assert_eq!(texts, ["Sauce first", "Then pasta", "Then cheese"]);
    }

    #[test]
    fn transform_applies_to_text_not_structure() {
        let steps = vec![Step::Group {
            text: "Add Garlic".to_string(),
            substeps: vec![leaf("Peel garlic cloves")],
        }];
        let out = render_with(&steps, &|text| highlight(text, "garlic"));
        assert!(out[0].text.has_match());
        assert!(out[0].substeps[0].text.has_match());
        assert_eq!(out[0].substeps.len(), 1);
    }
}
