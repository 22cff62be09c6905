//! Parser-based section location.
//!
//! Finds the first object literal bound to each locale, either as a property
//! (`en: { ... }`, `"en": { ... }`) or as a variable (`const en = { ... }`),
//! and flattens its nested properties into dotted key paths.

use std::{collections::HashMap, ops::Range, sync::Arc};

use anyhow::{Result, bail};
use swc_common::SourceMap;
use swc_ecma_ast::{Expr, KeyValueProp, ObjectLit, Pat, Prop, PropName, PropOrSpread, VarDeclarator};
use swc_ecma_visit::{Visit, VisitWith};

use super::{Section, SectionPair};
use crate::core::{
    locale::Locales,
    parsers::js::{ParsedModule, parse_js_source},
};

pub fn ast_sections(source: &str, file_path: &str, locales: &Locales) -> Result<SectionPair> {
    let parsed = parse_js_source(
        source.to_string(),
        file_path,
        Arc::new(SourceMap::default()),
    )?;

    let mut collector = LocaleObjectCollector::new(&parsed, locales);
    collector.visit_module(&parsed.module);
    let mut found = collector.found;

    Ok(SectionPair {
        primary: take_section(&mut found, &locales.primary)?,
        secondary: take_section(&mut found, &locales.secondary)?,
    })
}

fn take_section(found: &mut HashMap<String, LocaleObject>, locale: &str) -> Result<Section> {
    let Some(object) = found.remove(locale) else {
        bail!("No '{}' object literal found", locale);
    };
    Ok(Section {
        locale: locale.to_string(),
        keys: object.keys,
        span: object.span,
    })
}

struct LocaleObject {
    keys: Vec<String>,
    span: Range<usize>,
}

/// Collects the first object literal bound to each wanted locale name.
struct LocaleObjectCollector<'a> {
    parsed: &'a ParsedModule,
    locales: [&'a str; 2],
    found: HashMap<String, LocaleObject>,
}

impl<'a> LocaleObjectCollector<'a> {
    fn new(parsed: &'a ParsedModule, locales: &'a Locales) -> Self {
        Self {
            parsed,
            locales: [locales.primary.as_str(), locales.secondary.as_str()],
            found: HashMap::new(),
        }
    }

    /// Record `obj` under `name` if it is a wanted locale.
    ///
    /// Returns true when `name` is a wanted locale, even if an earlier object
    /// was already recorded for it.
    fn record(&mut self, name: &str, obj: &ObjectLit) -> bool {
        if !self.locales.iter().any(|locale| *locale == name) {
            return false;
        }
        if !self.found.contains_key(name) {
            let mut keys = Vec::new();
            flatten_object(obj, "", &mut keys);
            let span = self.parsed.offset(obj.span.lo)..self.parsed.offset(obj.span.hi);
            self.found
                .insert(name.to_string(), LocaleObject { keys, span });
        }
        true
    }
}

impl Visit for LocaleObjectCollector<'_> {
    fn visit_key_value_prop(&mut self, node: &KeyValueProp) {
        if let Some(name) = prop_name(&node.key)
            && let Expr::Object(obj) = unwrap_parens(&node.value)
            && self.record(&name, obj)
        {
            return;
        }
        node.visit_children_with(self);
    }

    fn visit_var_declarator(&mut self, node: &VarDeclarator) {
        if let Pat::Ident(binding) = &node.name
            && let Some(init) = &node.init
            && let Expr::Object(obj) = unwrap_parens(init)
            && self.record(&binding.id.sym, obj)
        {
            return;
        }
        node.visit_children_with(self);
    }
}

/// Push one dotted path per leaf property of `obj`.
///
/// Nested object values are descended into; every other value (strings,
/// arrays, calls, ...) is a leaf. Spreads and computed keys are skipped.
fn flatten_object(obj: &ObjectLit, prefix: &str, keys: &mut Vec<String>) {
    for prop in &obj.props {
        let PropOrSpread::Prop(prop) = prop else {
            continue;
        };
        let (name, value) = match &**prop {
            Prop::KeyValue(kv) => match prop_name(&kv.key) {
                Some(name) => (name, Some(unwrap_parens(&kv.value))),
                None => continue,
            },
            Prop::Shorthand(ident) => (ident.sym.to_string(), None),
            _ => continue,
        };

        let path = if prefix.is_empty() {
            name
        } else {
            format!("{}.{}", prefix, name)
        };

        match value {
            Some(Expr::Object(nested)) => flatten_object(nested, &path, keys),
            _ => keys.push(path),
        }
    }
}

fn prop_name(key: &PropName) -> Option<String> {
    match key {
        PropName::Ident(ident) => Some(ident.sym.to_string()),
        PropName::Str(s) => s.value.as_str().map(|s| s.to_string()),
        PropName::Num(n) => Some(n.value.to_string()),
        _ => None,
    }
}

fn unwrap_parens(expr: &Expr) -> &Expr {
    match expr {
        Expr::Paren(paren) => unwrap_parens(&paren.expr),
        other => other,
    }
}
