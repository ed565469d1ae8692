use git2::{Repository, Signature};
use std::fs;
use std::path::Path;
use std::process::Command as StdCommand;
use std::sync::Once;
use tempfile::{tempdir, TempDir};

#[allow(dead_code)]
static INIT: Once = Once::new();

#[allow(dead_code)]
pub fn setup_test_env() {
    INIT.call_once(|| {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off"))
            .is_test(true)
            .init();
    });
}

/// Run git in `dir` and fail the test if it does not succeed.
#[allow(dead_code)]
pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = StdCommand::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// A working repository with `composer.json` committed, plus a bare
/// repository registered as its `origin`.
#[allow(dead_code)]
pub struct TestRepo {
    pub dir: TempDir,
    pub remote: TempDir,
}

#[allow(dead_code)]
impl TestRepo {
    pub fn new(manifest: &str) -> Self {
        let repo = Self::without_remote(manifest);
        Repository::init_bare(repo.remote.path()).expect("Failed to init bare remote");
        let remote_url = repo.remote.path().to_str().unwrap().to_string();
        git(repo.path(), &["remote", "add", "origin", &remote_url]);
        repo
    }

    pub fn without_remote(manifest: &str) -> Self {
        setup_test_env();

        let dir = tempdir().expect("Failed to create temp directory");
        let remote = tempdir().expect("Failed to create remote directory");
        let repo = Repository::init(dir.path()).unwrap();

        let mut config = repo.config().unwrap();
        config.set_str("user.name", "Test User").unwrap();
        config.set_str("user.email", "test@example.com").unwrap();
        config.set_bool("commit.gpgsign", false).unwrap();
        config.set_bool("tag.gpgsign", false).unwrap();

        fs::write(dir.path().join("composer.json"), manifest).unwrap();

        let signature = Signature::now("Test User", "test@example.com").unwrap();
        let tree_id = {
            let mut index = repo.index().unwrap();
            index.add_path(Path::new("composer.json")).unwrap();
            index.write().unwrap();
            index.write_tree().unwrap()
        };
        let tree = repo.find_tree(tree_id).unwrap();
        repo.commit(
            Some("HEAD"),
            &signature,
            &signature,
            "Initial commit",
            &tree,
            &[],
        )
        .unwrap();

        TestRepo { dir, remote }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn open(&self) -> Repository {
        Repository::open(self.path()).unwrap()
    }

    pub fn open_remote(&self) -> Repository {
        Repository::open_bare(self.remote.path()).unwrap()
    }

    pub fn commit_as(&self, author: &str, message: &str) {
        let name = format!("user.name={author}");
        git(
            self.path(),
            &["-c", &name, "commit", "--allow-empty", "-m", message],
        );
    }

    pub fn tag(&self, name: &str) {
        git(self.path(), &["tag", "-a", name, "-m", name]);
    }

    pub fn manifest(&self) -> String {
        fs::read_to_string(self.path().join("composer.json")).unwrap()
    }

    pub fn head_message(&self) -> String {
        let repo = self.open();
        let head = repo.head().unwrap().peel_to_commit().unwrap();
        head.summary().unwrap_or_default().to_string()
    }

    pub fn tag_message(&self, name: &str) -> Option<String> {
        let repo = self.open();
        let reference = repo.find_reference(&format!("refs/tags/{name}")).ok()?;
        let tag = reference.peel_to_tag().ok()?;
        tag.message().map(String::from)
    }
}
