use crate::helpers::prelude::*;

#[test]
fn it_creates_a_c_project() {
    let dir = workspace();

    binary()
        .arg_name("hello")
        .arg_language("c")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Done!").from_utf8());

    assert_eq!(
        dir.tree("hello"),
        [
            ".gitignore",
            "CMakeLists.txt",
            "build/",
            "include/",
            "src/",
            "src/main.c",
        ]
    );
    assert!(dir.read("hello/src/main.c").contains("Hello World"));
}

#[test]
fn it_creates_a_cpp_project() {
    let dir = workspace();

    binary()
        .arg_name("hello")
        .arg_language("cpp")
        .current_dir(dir.path())
        .assert()
        .success();

    assert_eq!(
        dir.tree("hello"),
        [
            ".gitignore",
            "CMakeLists.txt",
            "build/",
            "include/",
            "src/",
            "src/main.cpp",
        ]
    );
    assert!(!dir.exists("hello/src/main.c"));
    assert!(dir.read("hello/src/main.cpp").contains("std::cout"));
}

#[test]
fn it_accepts_language_in_any_case() {
    for (language, main_file) in [("C", "main.c"), ("C++", "main.cpp"), ("Cpp", "main.cpp")] {
        let dir = workspace();

        binary()
            .arg_name("hello")
            .arg_language(language)
            .current_dir(dir.path())
            .assert()
            .success();

        assert!(dir.exists(&format!("hello/src/{main_file}")), "{language}");
    }
}

#[test]
fn it_fills_cmake_lists() {
    let dir = workspace();

    binary()
        .arg_name("my_tool")
        .arg_language("cpp")
        .current_dir(dir.path())
        .assert()
        .success();

    let cmake = dir.read("my_tool/CMakeLists.txt");
    assert!(cmake.contains("set(PROJECT_NAME my_tool)"));
    assert!(cmake.contains("project(${PROJECT_NAME} CXX)"));
    assert!(cmake.contains("add_executable(${PROJECT_NAME} src/main.cpp)"));
    assert!(dir
        .read("my_tool/.gitignore")
        .lines()
        .any(|line| line == "build/"));
}

#[test]
fn it_rejects_an_unknown_language() {
    let dir = workspace();

    binary()
        .arg_name("hello")
        .arg_language("rust")
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("unknown language `rust`").from_utf8());

    assert!(!dir.exists("hello"));
}

#[test]
fn it_fails_on_an_existing_directory() {
    let dir = tempdir().file("hello/notes.txt", "mine").build();

    binary()
        .arg_name("hello")
        .arg_language("c")
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("folder already exists").from_utf8());

    assert_eq!(dir.tree("hello"), ["notes.txt"]);
    assert_eq!(dir.read("hello/notes.txt"), "mine");
}

#[test]
fn it_fails_when_run_twice() {
    let dir = workspace();

    binary()
        .arg_name("twice")
        .arg_language("c")
        .current_dir(dir.path())
        .assert()
        .success();

    binary()
        .arg_name("twice")
        .arg_language("c")
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(
            predicates::str::contains("folder already exists")
                .and(predicates::str::contains("twice\" folder"))
                .from_utf8(),
        );

    assert!(dir.is_dir("twice/src"));
}

#[test]
fn it_writes_into_the_destination() {
    let dir = tempdir().file("out/.keep", "").build();
    let cwd = workspace();

    binary()
        .arg_name("hello")
        .arg_language("c")
        .arg_destination(dir.path().join("out"))
        .current_dir(cwd.path())
        .assert()
        .success();

    assert!(dir.is_dir("out/hello/src"));
    assert!(!cwd.exists("hello"));
}

#[test]
fn it_adds_a_build_script_on_request() {
    let dir = workspace();

    binary()
        .arg_name("hello")
        .arg_language("c")
        .flag_build_script()
        .current_dir(dir.path())
        .assert()
        .success();

    let script = dir.read("hello/build.sh");
    assert!(script.contains("cmake -S . -B build -G \"Ninja\""));
    assert!(script.contains("./build/hello"));
}
