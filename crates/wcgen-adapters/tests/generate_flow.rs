//! End-to-end generate flow over the in-memory adapters.

use std::path::Path;

use wcgen_adapters::{InMemoryFetcher, MemoryFilesystem};
use wcgen_core::{
    application::{GenerateService, ports::{Filesystem, TemplateUrls}},
    domain::ComponentRequest,
};

const MAIN: &str = r#"import _componentNameStyle from "./componentName.css?inline";
import { _componentNameTemplate } from "./_componentNameTemplate";

export class __ComponentName__ extends HTMLElement {}

customElements.define("wc-componentname", __ComponentName__);
"#;

const CSS: &str = ":host { display: block; }\n";
const TEMPLATE: &str = "<section><h2>###</h2></section>\n";

fn urls() -> TemplateUrls {
    TemplateUrls::from_base("https://example.invalid/ComponentName")
}

#[test]
fn generates_the_three_component_files() {
    let filesystem = MemoryFilesystem::new();
    let service = GenerateService::new(
        Box::new(InMemoryFetcher::new(MAIN, CSS, TEMPLATE)),
        Box::new(filesystem.clone()),
    );

    let request = ComponentRequest::new("header", "wc-").unwrap();
    let dir = Path::new("src/components/Header");
    let generated = service.generate(&request, &urls(), dir).unwrap();

    assert_eq!(
        generated.files,
        vec!["Header.ts", "header.css", "headerTemplate.ts"]
    );
    assert_eq!(generated.tag, "wc-header");

    let main = filesystem.read_file(&dir.join("Header.ts")).unwrap();
    assert!(main.contains("export class Header extends HTMLElement"));
    assert!(main.contains(r#"customElements.define("wc-header", Header);"#));
    assert!(main.contains(r#""./header.css?inline""#));
    assert!(main.contains(r#"from "./headerTemplate""#));

    // Stylesheet passes through byte-for-byte.
    assert_eq!(filesystem.read_file(&dir.join("header.css")).unwrap(), CSS);

    let template = filesystem.read_file(&dir.join("headerTemplate.ts")).unwrap();
    assert!(template.contains("<h2>HEADER</h2>"));
}

#[test]
fn custom_prefix_flows_through_to_the_tag() {
    let filesystem = MemoryFilesystem::new();
    let service = GenerateService::new(
        Box::new(InMemoryFetcher::new(MAIN, CSS, TEMPLATE)),
        Box::new(filesystem.clone()),
    );

    // Prefix without the trailing dash: normalized before substitution.
    let request = ComponentRequest::new("nav", "x").unwrap();
    let dir = Path::new("components/Nav");
    let generated = service.generate(&request, &urls(), dir).unwrap();

    assert_eq!(generated.tag, "x-nav");
    let main = filesystem.read_file(&dir.join("Nav.ts")).unwrap();
    assert!(main.contains(r#"customElements.define("x-nav", Nav);"#));
}

#[test]
fn fetch_failure_writes_nothing() {
    let filesystem = MemoryFilesystem::new();
    let service = GenerateService::new(
        Box::new(InMemoryFetcher::failing(vec![
            "ComponentName.ts: HTTP 404".into(),
        ])),
        Box::new(filesystem.clone()),
    );

    let request = ComponentRequest::new("header", "wc-").unwrap();
    let err = service
        .generate(&request, &urls(), Path::new("src/components/Header"))
        .unwrap_err();

    assert!(err.to_string().contains("HTTP 404"));
    assert!(
        filesystem.list_files().is_empty(),
        "a failed fetch must leave zero filesystem side effects"
    );
    assert!(!filesystem.exists(Path::new("src/components/Header")));
}
