use assert_fs::prelude::*;
use predicates::prelude::*;

use pathlib::{PathError, PathHandle, WalkControl};

// root/{a.txt, sub/{b.txt, c.txt}, notes.md}
fn tree() -> Result<assert_fs::TempDir, Box<dyn std::error::Error>> {
    let temp = assert_fs::TempDir::new()?;
    temp.child("a.txt").write_str("a")?;
    temp.child("notes.md").write_str("n")?;
    temp.child("sub/b.txt").write_str("b")?;
    temp.child("sub/c.txt").write_str("c")?;
    Ok(temp)
}

#[test]
fn walk_visits_directories_before_their_contents() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tree()?;
    let mut order = Vec::new();
    PathHandle::new(temp.path()).walk(|p, _| {
        order.push(p.name());
        Ok::<_, PathError>(WalkControl::Continue)
    })?;

    assert_eq!(order.len(), 5);
    let sub = order.iter().position(|n| n == "sub").expect("sub visited");
    for leaf in ["b.txt", "c.txt"] {
        let at = order.iter().position(|n| n == leaf).expect("leaf visited");
        assert!(sub < at, "{leaf} seen before its directory");
    }
    Ok(())
}

#[test]
fn find_txt_skips_directories_and_other_files() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tree()?;
    let mut found = Vec::new();
    PathHandle::new(temp.path()).find_files(r"\.txt$", |p, _| {
        assert!(p.is_file());
        found.push(p.name());
        Ok::<_, PathError>(WalkControl::Continue)
    })?;
    found.sort();
    assert_eq!(found, vec!["a.txt", "b.txt", "c.txt"]);
    Ok(())
}

#[test]
fn find_matches_against_full_path() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tree()?;
    let mut found = Vec::new();
    PathHandle::new(temp.path()).find_files(r"/sub/", |p, _| {
        found.push(p.name());
        Ok::<_, PathError>(WalkControl::Continue)
    })?;
    found.sort();
    assert_eq!(found, vec!["b.txt", "c.txt"]);
    Ok(())
}

#[derive(Debug)]
enum AppError {
    Path(PathError),
    TooBig(String),
}

impl From<PathError> for AppError {
    fn from(e: PathError) -> Self {
        AppError::Path(e)
    }
}

#[test]
fn caller_error_type_flows_through_search() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tree()?;
    let res = PathHandle::new(temp.path()).find_files(r"notes\.md$", |p, _| {
        Err(AppError::TooBig(p.name()))
    });
    assert!(matches!(res, Err(AppError::TooBig(n)) if n == "notes.md"));

    let res = PathHandle::new(temp.child("a.txt").path())
        .walk(|_, _| Ok::<_, AppError>(WalkControl::Continue));
    assert!(matches!(res, Err(AppError::Path(PathError::NotDirectory(_)))));
    Ok(())
}

#[test]
fn delete_removes_every_former_child() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tree()?;
    let root = temp.child("sub");
    PathHandle::new(root.path()).delete()?;

    root.assert(predicate::path::missing());
    for leaf in ["sub/b.txt", "sub/c.txt"] {
        temp.child(leaf).assert(predicate::path::missing());
        assert!(!PathHandle::new(temp.child(leaf).path()).exists());
    }
    temp.child("a.txt").assert(predicate::path::exists());
    Ok(())
}

#[test]
fn listing_children_come_back_uncached() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tree()?;
    let children = PathHandle::new(temp.path()).list_dir()?;
    assert_eq!(children.len(), 3);
    for child in &children {
        assert!(format!("{child:?}").contains("cached: false"));
        assert_eq!(child.parent().as_path(), temp.path());
    }
    Ok(())
}

#[test]
fn snapshot_keeps_first_modification_time() -> Result<(), Box<dyn std::error::Error>> {
    use filetime::{set_file_mtime, FileTime};

    let temp = assert_fs::TempDir::new()?;
    let file = temp.child("stamp.txt");
    file.write_str("x")?;
    set_file_mtime(file.path(), FileTime::from_unix_time(1_000_000, 0))?;

    let h = PathHandle::new(file.path());
    let first = h.info()?.modified;

    set_file_mtime(file.path(), FileTime::from_unix_time(2_000_000, 0))?;
    assert_eq!(h.info()?.modified, first);
    assert_ne!(h.fresh().info()?.modified, first);
    Ok(())
}
