use std::collections::HashMap;

use tera::{Function, Tera, Value};
use tracing::info;

use crate::{
    fields::MetaFields,
    resolver::{MetaSource, resolve},
    tags::MetaTags,
    values::{MetaKey, MetaMap, MetaValue},
};

pub fn get_string_arg(args: &HashMap<String, Value>, key: &str) -> Option<String> {
    match args.get(key) {
        Some(value) => value.as_str().map(|string| string.to_string()),
        None => None,
    }
}

fn get_meta_arg(args: &HashMap<String, Value>) -> tera::Result<Option<MetaFields>> {
    match args.get("meta") {
        Some(value) => serde_json::from_value(value.clone())
            .map(Some)
            .map_err(|e| tera::Error::msg(format!("meta is not a valid record: {e}"))),
        None => Ok(None),
    }
}

fn get_overrides(args: &HashMap<String, Value>) -> tera::Result<MetaMap> {
    let mut overrides = MetaMap::new();
    for (key, value) in args {
        // url seeds the resolution, it is not an override
        if key == "url" || key == "meta" {
            continue;
        }
        let key: MetaKey = key.parse().map_err(|e| tera::Error::msg(format!("{e}")))?;
        let value = MetaValue::try_from(value).map_err(|e| tera::Error::msg(format!("{e}")))?;
        overrides.insert(key, value);
    }
    Ok(overrides)
}

pub fn meta_tags(defaults: MetaMap) -> impl Function + 'static {
    move |args: &HashMap<String, Value>| {
        let url = get_string_arg(args, "url").unwrap_or_default();
        let fields = get_meta_arg(args)?;
        let overrides = get_overrides(args)?;
        let resolved = resolve(
            url,
            fields.as_ref().map(|fields| fields as &dyn MetaSource),
            &defaults,
            &overrides,
        );
        Ok(tera::to_value(MetaTags::new(&resolved).to_string())?)
    }
}

pub fn register(tera: &mut Tera, defaults: MetaMap) {
    tera.register_function("meta_tags", meta_tags(defaults));
    info!("meta_tags function is registered");
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tera::Context;

    use super::*;

    fn tera(template: &str) -> Tera {
        let mut tera = Tera::default();
        tera.add_raw_template("head.html", template).unwrap();
        tera
    }

    #[test]
    fn renders_empty_host() {
        let mut tera = tera("{{ meta_tags(url=url) | safe }}");
        register(&mut tera, MetaMap::new());
        let mut context = Context::new();
        context.insert("url", "https://testserver/");

        assert_eq!(
            tera.render("head.html", &context).unwrap(),
            "<meta property=\"og:type\" content=\"website\">\n  \
             <meta property=\"og:url\" content=\"https://testserver/\">\n  \
             <meta name=\"description\" content=\"\">"
        );
    }

    #[test]
    fn overrides_and_defaults() {
        let mut tera =
            tera("{{ meta_tags(url='https://testserver/', title='better stuff') | safe }}");
        register(
            &mut tera,
            MetaMap::from_iter([
                (MetaKey::Title, "stuff".into()),
                (MetaKey::Author, "someone".into()),
            ]),
        );
        let result = tera.render("head.html", &Context::new()).unwrap();

        assert!(result.contains("<meta property=\"og:title\" content=\"better stuff\">"));
        assert!(result.contains("<meta name=\"author\" content=\"someone\">"));
    }

    #[test]
    fn record_is_read_from_the_meta_arg() {
        let mut tera = tera("{{ meta_tags(url='https://testserver/page/', meta=meta) | safe }}");
        register(&mut tera, MetaMap::new());
        let mut context = Context::new();
        context.insert(
            "meta",
            &serde_json::json!({
                "title": "meta title",
                "canonical": "https://example.com/canonical/",
            }),
        );
        let result = tera.render("head.html", &context).unwrap();

        assert!(result.contains("<meta property=\"og:title\" content=\"meta title\">"));
        assert!(
            result.contains("<meta property=\"og:url\" content=\"https://example.com/canonical/\">")
        );
    }

    #[test]
    fn unknown_argument_fails_fast() {
        let mut tera = tera("{{ meta_tags(url='https://testserver/', og_title='no') | safe }}");
        register(&mut tera, MetaMap::new());

        assert!(tera.render("head.html", &Context::new()).is_err());
    }
}
