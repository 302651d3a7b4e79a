use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlCanvasElement, HtmlElement, NodeList};

use crate::config::Selectors;
use crate::reveal::{RevealTarget, SectionShape};

/// A chapter section and the children it reveals in stages.
#[derive(Debug, Clone)]
pub struct Chapter {
    pub root: Element,
    pub statements: Vec<Element>,
    pub trait_groups: Vec<Element>,
    pub signature: Option<Element>,
}

impl Chapter {
    fn locate(root: Element, selectors: &Selectors) -> Result<Self, JsValue> {
        let statements = collect(root.query_selector_all(selectors.statement)?);
        let trait_groups = collect(root.query_selector_all(selectors.trait_group)?);
        let signature = root.query_selector(selectors.signature)?;
        Ok(Self {
            root,
            statements,
            trait_groups,
            signature,
        })
    }

    pub fn shape(&self) -> SectionShape {
        SectionShape {
            statements: self.statements.len(),
            trait_groups: self.trait_groups.len(),
            has_signature: self.signature.is_some(),
        }
    }

    pub fn element(&self, target: RevealTarget) -> Option<&Element> {
        match target {
            RevealTarget::Section => Some(&self.root),
            RevealTarget::Statement(i) => self.statements.get(i),
            RevealTarget::TraitGroup(i) => self.trait_groups.get(i),
            RevealTarget::Signature => self.signature.as_ref(),
        }
    }
}

/// Every structural hook the page effects drive.
#[derive(Debug, Clone)]
pub struct Hooks {
    pub canvas: HtmlCanvasElement,
    pub time_value: Element,
    pub progress_bar: HtmlElement,
    pub replay_button: Element,
    pub chapters: Vec<Chapter>,
    pub display_lines: Vec<HtmlElement>,
}

impl Hooks {
    /// Look up every hook. A missing required hook fails with its selector.
    pub fn locate(document: &Document, selectors: &Selectors) -> Result<Self, JsValue> {
        let canvas = document
            .get_element_by_id(selectors.canvas_id)
            .ok_or_else(|| missing(selectors.canvas_id))?
            .dyn_into::<HtmlCanvasElement>()?;
        let time_value = required(document, selectors.time_value)?;
        let progress_bar = required(document, selectors.progress_bar)?.dyn_into::<HtmlElement>()?;
        let replay_button = required(document, selectors.replay_button)?;

        let chapters = collect(document.query_selector_all(selectors.chapter)?)
            .into_iter()
            .map(|root| Chapter::locate(root, selectors))
            .collect::<Result<Vec<_>, _>>()?;
        let display_lines = collect(document.query_selector_all(selectors.display_line)?)
            .into_iter()
            .filter_map(|e| e.dyn_into::<HtmlElement>().ok())
            .collect();

        Ok(Self {
            canvas,
            time_value,
            progress_bar,
            replay_button,
            chapters,
            display_lines,
        })
    }

    pub fn section_shapes(&self) -> Vec<SectionShape> {
        self.chapters.iter().map(Chapter::shape).collect()
    }

    pub fn chapter_index(&self, element: &Element) -> Option<usize> {
        self.chapters.iter().position(|c| &c.root == element)
    }
}

fn required(document: &Document, selector: &str) -> Result<Element, JsValue> {
    document
        .query_selector(selector)?
        .ok_or_else(|| missing(selector))
}

fn missing(selector: &str) -> JsValue {
    JsValue::from_str(&format!("hook not found: {}", selector))
}

/// Elements of a `NodeList`, in document order.
pub fn collect(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<Element>().ok())
        .collect()
}
