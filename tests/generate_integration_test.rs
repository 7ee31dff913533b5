//! End-to-end generation passes against throwaway Maven projects.

mod common;

use boilerplate::classpath::{BuildFileProbe, SkipClasspathCheck};
use boilerplate::config::{BoilerplateConfig, BraceStyle};
use boilerplate::emit::{DryRunEmitter, FileEmitter, JavaRenderer};
use boilerplate::generator::{Generator, Outcome};
use boilerplate::plan::{PlanFile, PlanFileProvider, SelectAll};
use boilerplate::source::JavaSourceIntrospector;
use boilerplate::{Error, ErrorCategory, FailureKind, ValidationFailure};
use common::{JavaProject, POM_WITHOUT_MOCKITO};
use indoc::indoc;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;

const FOO: &str = indoc! {"
    package com.example;

    import java.time.Clock;

    public class Foo {
        private final int count;
        private final Clock clock;

        public Foo(int count, Clock clock) {
            this.count = count;
            this.clock = clock;
        }

        private Foo() {
            this(0, null);
        }
    }
"};

fn provider(contents: &str) -> PlanFileProvider {
    PlanFileProvider::from_plan("plan.toml", PlanFile::parse(contents).unwrap())
}

fn run_with_plan(
    config: &BoilerplateConfig,
    source: &Path,
    plan: &str,
) -> boilerplate::Result<Outcome> {
    let probe = BuildFileProbe::new(&config.fixtures);
    let generator = Generator {
        introspector: &JavaSourceIntrospector,
        classpath: &probe,
        config,
    };
    let mut emitter = FileEmitter::new(JavaRenderer::new(&config.render));
    generator.run(source, &mut provider(plan), &mut emitter)
}

#[test]
fn test_generates_new_test_file() {
    let project = JavaProject::with_fixtures();
    let source = project.source("com.example", "Foo", FOO);
    let config = BoilerplateConfig::default();

    let outcome = run_with_plan(
        &config,
        &source,
        indoc! {r#"
            [[constructor]]
            signature = "(int, Clock)"

            [[constructor.parameter]]
            name = "count"
            constraint = "equal"
            boundary = 5

            [[constructor.parameter]]
            name = "clock"
            disallow_null = true
        "#},
    )
    .unwrap();

    let test_file = project.test_path("com.example", "Foo");
    match &outcome {
        Outcome::Generated { test_file: written, cases } => {
            assert_eq!(written, &test_file);
            assert_eq!(cases.len(), 3);
        }
        other => panic!("unexpected outcome: {other:?}"),
    }

    let expected = indoc! {"
        package com.example;

        import static org.mockito.Mockito.mock;
        import org.junit.Test;

        public class FooTest
        {
            @Test(expected = IllegalArgumentException.class)
            public void constructor_countLessThan5_throwsIllegalArgumentException()
            {
                int count = 4;
                Clock clock = mock(Clock.class);
                new Foo(count, clock);
            }

            @Test(expected = IllegalArgumentException.class)
            public void constructor_countGreaterThan5_throwsIllegalArgumentException()
            {
                int count = 6;
                Clock clock = mock(Clock.class);
                new Foo(count, clock);
            }

            @Test(expected = NullPointerException.class)
            public void constructor_nullClock_throwsNullPointerException()
            {
                int count = 5;
                Clock clock = null;
                new Foo(count, clock);
            }
        }
    "};
    assert_eq!(fs::read_to_string(&test_file).unwrap(), expected);
}

#[test]
fn test_appends_to_existing_test_file() {
    let project = JavaProject::with_fixtures();
    let source = project.source(
        "com.example",
        "Greeter",
        "package com.example;\n\npublic class Greeter {\n    public Greeter(String name) {}\n}\n",
    );
    let test_file = project.write(
        "src/test/java/com/example/GreeterTest.java",
        indoc! {"
            package com.example;

            public class GreeterTest {
                @org.junit.Test
                public void existing() {
                }
            }
        "},
    );

    let mut config = BoilerplateConfig::default();
    config.render.brace_style = BraceStyle::SameLine;
    run_with_plan(
        &config,
        &source,
        indoc! {r#"
            [[constructor]]
            signature = "(String)"

            [[constructor.parameter]]
            name = "name"
            disallow_blank = true
        "#},
    )
    .unwrap();

    let text = fs::read_to_string(&test_file).unwrap();
    assert!(text.starts_with(
        "package com.example;\n\nimport static org.mockito.Mockito.mock;\nimport org.junit.Test;\n\npublic class GreeterTest {"
    ));
    assert!(text.contains("    public void existing() {\n    }\n\n    @Test(expected = IllegalArgumentException.class)"));
    assert!(text.contains("    public void constructor_blankName_throwsIllegalArgumentException() {\n"));
    assert!(text.contains("        String name = \"\\n\\n  \\t \";\n        new Greeter(name);\n    }\n}"));
    assert!(!text.contains("nullName"));
}

#[test]
fn test_missing_mockito_aborts_before_writing() {
    let project = JavaProject::new();
    project.write("pom.xml", POM_WITHOUT_MOCKITO);
    let source = project.source("com.example", "Foo", FOO);

    let err = run_with_plan(
        &BoilerplateConfig::default(),
        &source,
        "[[constructor]]\nsignature = \"(int, Clock)\"\n[[constructor.parameter]]\nname = \"clock\"\ndisallow_null = true\n",
    )
    .unwrap_err();

    assert!(matches!(err, Error::MissingFixture { ref fixture, .. } if fixture == "Mockito"));
    assert_eq!(err.category(), ErrorCategory::UnsupportedInput);
    assert!(!project.test_path("com.example", "Foo").exists());
}

#[test]
fn test_cancelled_plan_writes_nothing() {
    let project = JavaProject::with_fixtures();
    let source = project.source("com.example", "Foo", FOO);

    let outcome = run_with_plan(&BoilerplateConfig::default(), &source, "cancel = true\n").unwrap();

    assert_eq!(outcome, Outcome::Cancelled);
    assert!(!project.test_path("com.example", "Foo").exists());
}

#[test]
fn test_invalid_rule_blocks_confirmation() {
    let project = JavaProject::with_fixtures();
    let source = project.source("com.example", "Foo", FOO);

    let err = run_with_plan(
        &BoilerplateConfig::default(),
        &source,
        "[[constructor]]\nsignature = \"(int, Clock)\"\n[[constructor.parameter]]\nname = \"count\"\nconstraint = \"less\"\n",
    )
    .unwrap_err();

    match err {
        Error::Validation(ValidationFailure::InvalidRules { constructors }) => {
            assert_eq!(constructors, vec!["Constructor: (int count, Clock clock)".to_string()]);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(!project.test_path("com.example", "Foo").exists());
}

#[test]
fn test_empty_plan_is_nothing_selected() {
    let project = JavaProject::with_fixtures();
    let source = project.source("com.example", "Foo", FOO);

    let err = run_with_plan(&BoilerplateConfig::default(), &source, "").unwrap_err();
    assert!(matches!(err, Error::Validation(ValidationFailure::NothingSelected)));
}

#[test]
fn test_default_rules_produce_no_negative_cases() {
    let project = JavaProject::with_fixtures();
    let source = project.source("com.example", "Foo", FOO);

    let outcome = run_with_plan(
        &BoilerplateConfig::default(),
        &source,
        "[[constructor]]\nsignature = \"(int, Clock)\"\n",
    )
    .unwrap();

    assert_eq!(outcome, Outcome::NoNegativeCases);
    assert!(!project.test_path("com.example", "Foo").exists());
}

#[test]
fn test_select_all_generates_null_cases() {
    let project = JavaProject::with_fixtures();
    let source = project.source("com.example", "Foo", FOO);
    let config = BoilerplateConfig::default();
    let generator = Generator {
        introspector: &JavaSourceIntrospector,
        classpath: &SkipClasspathCheck,
        config: &config,
    };
    let mut emitter = FileEmitter::new(JavaRenderer::new(&config.render));

    let outcome = generator.run(&source, &mut SelectAll, &mut emitter).unwrap();

    match outcome {
        Outcome::Generated { cases, .. } => {
            let names: Vec<&str> = cases.iter().map(|c| c.name.as_str()).collect();
            assert_eq!(names, vec!["constructor_nullClock_throwsNullPointerException"]);
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    let text = fs::read_to_string(project.test_path("com.example", "Foo")).unwrap();
    assert!(text.contains("        int count = 0;\n        Clock clock = null;\n"));
}

#[test]
fn test_class_without_testable_constructors() {
    let project = JavaProject::with_fixtures();
    let source = project.source(
        "com.example",
        "Util",
        "package com.example;\n\npublic class Util {\n    private Util(int x) {}\n}\n",
    );
    let config = BoilerplateConfig::default();
    let generator = Generator {
        introspector: &JavaSourceIntrospector,
        classpath: &SkipClasspathCheck,
        config: &config,
    };
    let mut emitter = DryRunEmitter::new(JavaRenderer::new(&config.render));

    let outcome = generator.run(&source, &mut SelectAll, &mut emitter).unwrap();
    assert_eq!(outcome, Outcome::NothingToTest);
    assert!(emitter.output().is_none());
}

#[test]
fn test_unsupported_parameter_type_is_fatal() {
    let project = JavaProject::with_fixtures();
    let source = project.source(
        "com.example",
        "Timer",
        "package com.example;\n\npublic class Timer {\n    public Timer(long millis) {}\n}\n",
    );

    let err = run_with_plan(&BoilerplateConfig::default(), &source, "").unwrap_err();
    match err {
        Error::UnsupportedParameterType { type_name, parameter } => {
            assert_eq!(type_name, "long");
            assert_eq!(parameter, "millis");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_source_outside_source_root() {
    let project = JavaProject::with_fixtures();
    let source = project.write("lib/Foo.java", "public class Foo { public Foo(int a) {} }");

    let err = run_with_plan(&BoilerplateConfig::default(), &source, "").unwrap_err();
    assert!(matches!(err, Error::NotInSourceRoot { .. }));
    assert!(err.is_user_fixable());
}

#[test]
fn test_dry_run_leaves_project_untouched() {
    let project = JavaProject::with_fixtures();
    let source = project.source("com.example", "Foo", FOO);
    let config = BoilerplateConfig::default();
    let probe = BuildFileProbe::new(&config.fixtures);
    let generator = Generator {
        introspector: &JavaSourceIntrospector,
        classpath: &probe,
        config: &config,
    };
    let mut emitter = DryRunEmitter::new(JavaRenderer::new(&config.render));
    let mut plan = provider(indoc! {r#"
        [[constructor]]
        signature = "(int, Clock)"

        [[constructor.parameter]]
        name = "count"
        constraint = ">="
        boundary = "-3"
    "#});

    let outcome = generator.run(&source, &mut plan, &mut emitter).unwrap();

    match outcome {
        Outcome::Generated { cases, .. } => {
            assert_eq!(cases.len(), 1);
            assert_eq!(cases[0].name, "constructor_countLessThanNegative3_throwsIllegalArgumentException");
            assert_eq!(cases[0].expected_failure, Some(FailureKind::IllegalArgument));
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    let output = emitter.output().unwrap();
    assert!(output.contains("        int count = -4;\n"));
    assert!(!project.test_path("com.example", "Foo").exists());
}
