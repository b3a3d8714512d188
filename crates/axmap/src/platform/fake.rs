/*!
Scripted in-memory platform for tests.

A scene describes apps, their window slots, and each window's descendant
tree. Handles are cheap clones sharing the scene through `Rc`, mirroring the
reference-counted handles of real platforms. The scene also counts how often
the core hits the two expensive enumeration surfaces, so cache purity and
retry bounds are observable.
*/

use std::cell::RefCell;
use std::rc::Rc;

use super::{AppHandle, ElementHandle, Platform};

/// One scripted element and its subtree.
#[derive(Debug, Clone, Default)]
pub(crate) struct Node {
  pub(crate) id: u32,
  pub(crate) role: Option<String>,
  pub(crate) title: Option<String>,
  pub(crate) value: Option<String>,
  pub(crate) help: Option<String>,
  pub(crate) role_description: Option<String>,
  pub(crate) children: Vec<Node>,
}

impl Node {
  pub(crate) fn new(role: &str) -> Self {
    Self {
      role: Some(role.to_owned()),
      ..Self::default()
    }
  }

  pub(crate) fn id(mut self, id: u32) -> Self {
    self.id = id;
    self
  }

  pub(crate) fn titled(mut self, title: &str) -> Self {
    self.title = Some(title.to_owned());
    self
  }

  pub(crate) fn valued(mut self, value: &str) -> Self {
    self.value = Some(value.to_owned());
    self
  }

  pub(crate) fn help(mut self, help: &str) -> Self {
    self.help = Some(help.to_owned());
    self
  }

  pub(crate) fn described(mut self, description: &str) -> Self {
    self.role_description = Some(description.to_owned());
    self
  }

  pub(crate) fn child(mut self, child: Node) -> Self {
    self.children.push(child);
    self
  }
}

/// One scripted top-level window slot of an app.
#[derive(Debug, Clone)]
pub(crate) struct WindowSlot {
  node: Option<Node>,
  /// App-snapshot refresh count at which the window becomes visible.
  visible_from: usize,
}

impl WindowSlot {
  pub(crate) fn of(node: Node) -> Self {
    Self {
      node: Some(node),
      visible_from: 0,
    }
  }

  /// A stale entry the host hands back with nothing behind it.
  pub(crate) const fn invalid() -> Self {
    Self {
      node: None,
      visible_from: 0,
    }
  }

  /// Hide the window until the `refresh`-th app-snapshot refresh.
  pub(crate) const fn visible_from(mut self, refresh: usize) -> Self {
    self.visible_from = refresh;
    self
  }
}

/// One scripted application.
#[derive(Debug, Clone)]
pub(crate) struct AppSpec {
  pub(crate) pid: i32,
  pub(crate) windows: Vec<WindowSlot>,
}

#[derive(Debug, Default)]
pub(crate) struct Scene {
  apps: Vec<AppSpec>,
  /// `running_applications` calls - one per window-cache rebuild.
  app_refreshes: usize,
  /// `descendants` walks - one per object-map rebuild.
  descendant_walks: usize,
}

/// Scripted platform. Clones share the scene, so tests keep one copy to read
/// counters after handing another to the resolver.
#[derive(Clone)]
pub(crate) struct FakePlatform {
  scene: Rc<RefCell<Scene>>,
}

impl FakePlatform {
  pub(crate) fn new(apps: Vec<AppSpec>) -> Self {
    Self {
      scene: Rc::new(RefCell::new(Scene {
        apps,
        ..Scene::default()
      })),
    }
  }

  pub(crate) fn app_refreshes(&self) -> usize {
    self.scene.borrow().app_refreshes
  }

  pub(crate) fn descendant_walks(&self) -> usize {
    self.scene.borrow().descendant_walks
  }
}

/// Reference to a scripted application.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FakeApp {
  pid: i32,
}

impl AppHandle for FakeApp {
  fn pid(&self) -> i32 {
    self.pid
  }
}

/// Scripted element handle.
#[derive(Debug, Clone)]
pub(crate) enum FakeElement {
  /// Root element of an application.
  AppRoot {
    app_index: usize,
    scene: Rc<RefCell<Scene>>,
  },
  /// A window or descendant element.
  Node {
    node: Rc<Node>,
    scene: Rc<RefCell<Scene>>,
  },
}

impl FakeElement {
  /// Wrap a node outside any scene, for derivation-level tests.
  pub(crate) fn detached(node: Node) -> Self {
    Self::Node {
      node: Rc::new(node),
      scene: Rc::new(RefCell::new(Scene::default())),
    }
  }

  /// Scripted id of the node behind this handle, for identity assertions.
  pub(crate) fn node_id(&self) -> Option<u32> {
    match self {
      Self::AppRoot { .. } => None,
      Self::Node { node, .. } => Some(node.id),
    }
  }

  fn attr(&self, read: impl Fn(&Node) -> Option<String>) -> Option<String> {
    match self {
      Self::AppRoot { .. } => None,
      Self::Node { node, .. } => read(node),
    }
  }
}

fn collect_descendants(node: &Node, scene: &Rc<RefCell<Scene>>, out: &mut Vec<FakeElement>) {
  for child in &node.children {
    out.push(FakeElement::Node {
      node: Rc::new(child.clone()),
      scene: Rc::clone(scene),
    });
    collect_descendants(child, scene, out);
  }
}

impl ElementHandle for FakeElement {
  fn role(&self) -> Option<String> {
    match self {
      Self::AppRoot { .. } => Some("AXApplication".to_owned()),
      Self::Node { node, .. } => node.role.clone(),
    }
  }

  fn title(&self) -> Option<String> {
    self.attr(|n| n.title.clone())
  }

  fn value_text(&self) -> Option<String> {
    self.attr(|n| n.value.clone())
  }

  fn help_text(&self) -> Option<String> {
    self.attr(|n| n.help.clone())
  }

  fn role_description(&self) -> Option<String> {
    self.attr(|n| n.role_description.clone())
  }

  fn windows(&self) -> Vec<Option<Self>> {
    match self {
      Self::AppRoot { app_index, scene } => {
        let s = scene.borrow();
        let Some(app) = s.apps.get(*app_index) else {
          return Vec::new();
        };
        app
          .windows
          .iter()
          .map(|slot| {
            if slot.visible_from > s.app_refreshes {
              return None;
            }
            slot.node.as_ref().map(|node| Self::Node {
              node: Rc::new(node.clone()),
              scene: Rc::clone(scene),
            })
          })
          .collect()
      }
      Self::Node { .. } => Vec::new(),
    }
  }

  fn descendants(&self) -> Vec<Self> {
    match self {
      Self::AppRoot { .. } => Vec::new(),
      Self::Node { node, scene } => {
        scene.borrow_mut().descendant_walks += 1;
        let mut out = Vec::new();
        collect_descendants(node, scene, &mut out);
        out
      }
    }
  }
}

impl Platform for FakePlatform {
  type App = FakeApp;
  type Element = FakeElement;

  fn running_applications(&self) -> Vec<FakeApp> {
    let mut scene = self.scene.borrow_mut();
    scene.app_refreshes += 1;
    scene.apps.iter().map(|app| FakeApp { pid: app.pid }).collect()
  }

  fn app_element(&self, pid: i32) -> Option<FakeElement> {
    let scene = self.scene.borrow();
    let app_index = scene.apps.iter().position(|app| app.pid == pid)?;
    Some(FakeElement::AppRoot {
      app_index,
      scene: Rc::clone(&self.scene),
    })
  }
}
