//! End-to-end conformance scenarios over descriptors and the registry.

use std::sync::Arc;

use conform_core::{
    Candidate, ClassDescriptor, ClassRecord, ConformanceChecker, InterfaceDefinition, MemberKind,
    MethodSignature, TypeRegistry, UnmetReason, VerifyMode, VerifyOptions, verify, verify_all,
};
use insta::assert_snapshot;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn shape() -> InterfaceDefinition {
    let mut shape = InterfaceDefinition::new("Shape");
    shape.define_method("area", Vec::<&str>::new(), "number");
    shape.define_method("edges", Vec::<&str>::new(), "number");
    shape
}

fn drawable() -> InterfaceDefinition {
    let mut drawable = InterfaceDefinition::new("Drawable");
    drawable.define_method("draw", ["number", "number"], "void");
    drawable
}

/// Builds a `Square` whose methods live one level up, on its prototype.
#[derive(Default)]
struct SquareBuilder {
    prototype: ClassDescriptor,
}

impl SquareBuilder {
    fn with_area(mut self) -> Self {
        self.prototype = self.prototype.with_method("area");
        self
    }

    fn with_edges(mut self) -> Self {
        self.prototype = self.prototype.with_method("edges");
        self
    }

    fn with_draw(mut self) -> Self {
        self.prototype = self.prototype.with_method("draw");
        self
    }

    fn build(self) -> ClassDescriptor {
        ClassDescriptor::named("Square").extends(Arc::new(self.prototype))
    }
}

#[test]
fn server_with_inherited_listen_passes() {
    init_tracing();
    let server = InterfaceDefinition::with_methods(
        "Server",
        [MethodSignature::new("listen", ["number", "function"], "void")],
    );
    assert_eq!(server.methods().len(), 1);

    let emitter = Arc::new(ClassDescriptor::named("Base").with_method("listen"));
    let socket = Arc::new(ClassDescriptor::named("Socket").extends(emitter));
    let http = ClassDescriptor::named("HttpServer").extends(socket);
    assert!(verify(&http, &[server]).is_ok());
}

#[test]
fn square_implementing_everything_passes() {
    init_tracing();
    let square = SquareBuilder::default()
        .with_area()
        .with_edges()
        .with_draw()
        .build();
    assert!(verify(&square, &[shape(), drawable()]).is_ok());
}

#[test]
fn missing_interface_method_is_named() {
    init_tracing();
    let square = SquareBuilder::default().with_area().build();
    let err = verify(&square, &[shape()]).unwrap_err();
    assert_eq!(err.interface(), "Shape");
    assert_eq!(err.method(), "edges");
    assert_eq!(err.reason(), UnmetReason::Missing);
    assert_snapshot!(err.to_string(), @r#"Class "Square" must implement method Shape.edges() => number"#);
}

#[test]
fn first_unsatisfied_interface_is_reported() {
    init_tracing();
    let square = SquareBuilder::default().with_area().with_edges().build();
    let err = verify(&square, &[shape(), drawable()]).unwrap_err();
    assert_eq!(err.interface(), "Drawable");
    assert_eq!(err.method(), "draw");
    assert_eq!(err.arg_types(), ["number", "number"]);
    assert_eq!(err.ret_type().as_str(), "void");
    assert_snapshot!(err.to_string(), @r#"Class "Square" must implement method Drawable.draw(number, number) => void"#);
}

#[test]
fn fail_fast_stops_at_first_violation() {
    let square = ClassDescriptor::named("Square");
    let err = verify(&square, &[shape(), drawable()]).unwrap_err();
    assert_eq!(err.method(), "area");
}

#[test]
fn non_callable_member_shadows_ancestor_method() {
    init_tracing();
    let base = Arc::new(ClassDescriptor::named("Base").with_method("area").with_method("edges"));
    let middle = Arc::new(ClassDescriptor::named("Middle").with_field("edges").extends(base));
    let square = ClassDescriptor::named("Square").extends(middle);

    let err = verify(&square, &[shape()]).unwrap_err();
    assert_eq!(err.method(), "edges");
    assert_eq!(err.reason(), UnmetReason::NotCallable);
}

#[test]
fn nearest_method_wins_over_ancestor_field() {
    let base = Arc::new(ClassDescriptor::named("Base").with_field("area").with_field("edges"));
    let square = ClassDescriptor::named("Square")
        .with_method("area")
        .with_method("edges")
        .extends(base);
    assert!(verify(&square, &[shape()]).is_ok());
}

#[test]
fn anonymous_candidate_uses_generic_label() {
    let anon = ClassDescriptor::anonymous().with_method("area");
    let err = verify(&anon, &[shape()]).unwrap_err();
    assert_snapshot!(err.to_string(), @"Class must implement method Shape.edges() => number");
}

#[test]
fn repeated_verification_is_identical() {
    let square = SquareBuilder::default().with_area().build();
    let interfaces = [shape(), drawable()];
    let first = verify(&square, &interfaces);
    let second = verify(&square, &interfaces);
    assert_eq!(first, second);
    assert!(first.is_err());

    let complete = SquareBuilder::default().with_area().with_edges().with_draw().build();
    assert_eq!(verify(&complete, &interfaces), verify(&complete, &interfaces));
}

#[test]
fn collect_all_reports_every_violation_in_order() {
    let square = SquareBuilder::default().with_edges().build();
    let report = verify_all(&square, &[shape(), drawable()]).unwrap_err();
    let names: Vec<_> = report
        .violations()
        .iter()
        .map(|v| format!("{}.{}", v.interface(), v.method()))
        .collect();
    assert_eq!(names, ["Shape.area", "Drawable.draw"]);
    assert_snapshot!(report.to_string(), @r#"
    2 unimplemented methods:
    - Class "Square" must implement method Shape.area() => number
    - Class "Square" must implement method Drawable.draw(number, number) => void
    "#);
}

#[derive(Clone)]
struct Ouroboros;

impl Candidate for Ouroboros {
    fn display_name(&self) -> Option<&str> {
        Some("Ouroboros")
    }

    fn own_member(&self, _name: &str) -> Option<MemberKind> {
        None
    }

    fn parent(&self) -> Option<Self> {
        Some(Ouroboros)
    }
}

#[test]
fn cyclic_chain_terminates_at_depth_limit() {
    init_tracing();
    let err = verify(Ouroboros, &[shape()]).unwrap_err();
    assert_eq!(err.reason(), UnmetReason::DepthExceeded { limit: 64 });
    assert_eq!(err.candidate(), Some("Ouroboros"));

    let checker = ConformanceChecker::new(VerifyOptions::default().with_max_depth(3));
    let err = checker.verify(Ouroboros, &[drawable()]).unwrap_err();
    assert_eq!(err.reason(), UnmetReason::DepthExceeded { limit: 3 });
}

#[test]
fn registry_backed_candidates_verify() {
    init_tracing();
    let mut registry = TypeRegistry::new();
    registry
        .register(ClassRecord::new("Polygon").with_method("edges"))
        .unwrap();
    registry
        .register(
            ClassRecord::new("Square")
                .with_method("area")
                .with_method("draw")
                .extends("Polygon"),
        )
        .unwrap();
    registry
        .register(ClassRecord::new("Sketch").with_field("draw").extends("Square"))
        .unwrap();

    let square = registry.get("Square").unwrap();
    assert!(verify(square, &[shape(), drawable()]).is_ok());

    let sketch = registry.get("Sketch").unwrap();
    let checker =
        ConformanceChecker::new(VerifyOptions::default().with_mode(VerifyMode::CollectAll));
    let err = checker.check(sketch, &[shape(), drawable()]).unwrap_err();
    assert_eq!(err.violations().len(), 1);
    assert_snapshot!(err.to_string(), @r#"
    1 unimplemented method:
    - Class "Sketch" must implement method Drawable.draw(number, number) => void
    "#);
}
