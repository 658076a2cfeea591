//! End-to-end rendering tests through the public pipeline entry points

use std::fs;
use std::io::Write as _;
use std::path::PathBuf;
use std::sync::Arc;

use pretty_assertions::assert_eq;
use rosjinja::{
    load_mappings, render_file_to_temp, render_file_with, render_str_with, Error, Mappings,
    PackageResolver, RenderError, ResolveError,
};

/// Resolver with a fixed answer so tests never touch the environment
struct StubResolver {
    path: PathBuf,
}

impl PackageResolver for StubResolver {
    fn resolve(&self, _name: &str) -> Result<PathBuf, ResolveError> {
        Ok(self.path.clone())
    }
}

fn stub_resolver() -> Arc<dyn PackageResolver> {
    Arc::new(StubResolver {
        path: PathBuf::from("/opt/ros/share/std_msgs"),
    })
}

fn write_template(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_hello_names_end_to_end() {
    let template = write_template(
        "1. Hello {{ names[0] }}!\n2. Hello {{ names[1] }}!\n3. Hello {{ names[2] }}!\n",
    );
    let mappings = load_mappings(["names:=[r1, r2, r3]"]);
    let out = render_file_with(template.path(), &mappings, stub_resolver()).unwrap();
    assert_eq!(out, "1. Hello r1!\n2. Hello r2!\n3. Hello r3!\n");
}

#[test]
fn test_literal_template_round_trips_regardless_of_mappings() {
    let source = "no variables here\njust text\n";
    let mappings = load_mappings(["unused:=1", "also_unused:=[a, b]"]);
    let out = render_str_with(source, &mappings, stub_resolver()).unwrap();
    assert_eq!(out, source);
}

#[test]
fn test_strict_undefined_with_empty_mappings() {
    let err = render_str_with("{{ missing }}", &Mappings::new(), stub_resolver()).unwrap_err();
    match err {
        Error::Render(RenderError::UndefinedVariable { name }) => assert_eq!(name, "missing"),
        other => panic!("expected UndefinedVariable, got {other:?}"),
    }
}

#[test]
fn test_typed_mappings_drive_template_logic() {
    let source = "{% for i in range(count) %}{{ label }}-{{ i }};{% endfor %}";
    let mappings = load_mappings(["count:=3", "label:=robot"]);
    let out = render_str_with(source, &mappings, stub_resolver()).unwrap();
    assert_eq!(out, "robot-0;robot-1;robot-2;");
}

#[test]
fn test_quoted_number_stays_textual() {
    // '100' is a string, so templated concatenation treats it as text
    let mappings = load_mappings(["version:='100'"]);
    let out = render_str_with("v{{ version }}", &mappings, stub_resolver()).unwrap();
    assert_eq!(out, "v100");
}

#[test]
fn test_resolve_package_path_in_template() {
    let mappings = Mappings::new();
    let out = render_str_with(
        "path: {{ resolve_package_path('std_msgs') }}",
        &mappings,
        stub_resolver(),
    )
    .unwrap();
    assert_eq!(out, "path: /opt/ros/share/std_msgs");
}

#[test]
fn test_render_file_missing_template_is_read_error() {
    let err = render_file_with(
        std::path::Path::new("/definitely/not/here.j2"),
        &Mappings::new(),
        stub_resolver(),
    )
    .unwrap_err();
    assert!(matches!(err, Error::ReadInput { .. }));
}

#[test]
fn test_render_file_to_temp_persists_output() {
    let template = write_template("Hello, {{ name }}!\n");
    let mappings = load_mappings(["name:=world"]);
    let temp_path = render_file_to_temp(template.path(), &mappings).unwrap();

    let file_name = temp_path.file_name().unwrap().to_string_lossy().into_owned();
    assert!(file_name.starts_with("rosjinja_"));
    assert_eq!(fs::read_to_string(&temp_path).unwrap(), "Hello, world!\n");

    fs::remove_file(&temp_path).unwrap();
}

#[test]
fn test_no_partial_output_on_failure() {
    // the failing reference comes after renderable text; the call must
    // return an error, not a prefix
    let err = render_str_with(
        "ok so far {{ boom }}",
        &Mappings::new(),
        stub_resolver(),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        Error::Render(RenderError::UndefinedVariable { .. })
    ));
}
