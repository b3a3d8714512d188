/*!
Role abbreviation table.

Derived identifiers are prefixed with a short code for the element's role so
that `btnOK` and `lblOK` stay distinct. Roles outside the table collapse to
[`UNKNOWN_ROLE`] rather than failing: an element we cannot classify is still
addressable by its label.
*/

/// Abbreviation used for roles not in the table (and for elements whose role
/// attribute cannot be read at all).
pub const UNKNOWN_ROLE: &str = "ukn";

/// Raw role string constants (`kAX*Role` values the table knows).
mod ax_role {
  pub(super) const APPLICATION: &str = "AXApplication";
  pub(super) const WINDOW: &str = "AXWindow";
  pub(super) const DIALOG: &str = "AXDialog";
  pub(super) const SHEET: &str = "AXSheet";
  pub(super) const DRAWER: &str = "AXDrawer";

  pub(super) const BUTTON: &str = "AXButton";
  pub(super) const CHECK_BOX: &str = "AXCheckBox";
  pub(super) const RADIO_BUTTON: &str = "AXRadioButton";
  pub(super) const POP_UP_BUTTON: &str = "AXPopUpButton";
  pub(super) const TEXT_FIELD: &str = "AXTextField";
  pub(super) const TEXT_AREA: &str = "AXTextArea";
  pub(super) const SECURE_TEXT_FIELD: &str = "AXSecureTextField";
  pub(super) const STATIC_TEXT: &str = "AXStaticText";
  pub(super) const COMBO_BOX: &str = "AXComboBox";
  pub(super) const SLIDER: &str = "AXSlider";
  pub(super) const LINK: &str = "AXLink";

  pub(super) const MENU: &str = "AXMenu";
  pub(super) const MENU_BAR: &str = "AXMenuBar";
  pub(super) const MENU_ITEM: &str = "AXMenuItem";
  pub(super) const MENU_BAR_ITEM: &str = "AXMenuBarItem";

  pub(super) const LIST: &str = "AXList";
  pub(super) const TABLE: &str = "AXTable";
  pub(super) const CELL: &str = "AXCell";
  pub(super) const ROW: &str = "AXRow";
  pub(super) const COLUMN: &str = "AXColumn";
  pub(super) const OUTLINE: &str = "AXOutline";

  pub(super) const IMAGE: &str = "AXImage";
  pub(super) const GROUP: &str = "AXGroup";
  pub(super) const SPLIT_GROUP: &str = "AXSplitGroup";
  pub(super) const TAB_GROUP: &str = "AXTabGroup";
  pub(super) const TOOLBAR: &str = "AXToolbar";
  pub(super) const SCROLL_AREA: &str = "AXScrollArea";
  pub(super) const SCROLL_BAR: &str = "AXScrollBar";
  pub(super) const PROGRESS_INDICATOR: &str = "AXProgressIndicator";
}

/// Map a raw platform role to the short code prefixing derived identifiers.
pub fn abbreviated_role(raw: &str) -> &'static str {
  match raw {
    ax_role::APPLICATION => "app",
    ax_role::WINDOW => "wnd",
    ax_role::DIALOG => "dlg",
    ax_role::SHEET => "sht",
    ax_role::DRAWER => "dwr",

    ax_role::BUTTON => "btn",
    ax_role::CHECK_BOX => "chk",
    ax_role::RADIO_BUTTON => "rbtn",
    ax_role::POP_UP_BUTTON => "pbtn",
    ax_role::TEXT_FIELD | ax_role::TEXT_AREA | ax_role::SECURE_TEXT_FIELD => "txt",
    ax_role::STATIC_TEXT => "lbl",
    ax_role::COMBO_BOX => "cbo",
    ax_role::SLIDER => "sldr",
    ax_role::LINK => "lnk",

    ax_role::MENU | ax_role::MENU_BAR | ax_role::MENU_ITEM | ax_role::MENU_BAR_ITEM => "mnu",

    ax_role::LIST => "lst",
    ax_role::TABLE => "tbl",
    ax_role::CELL => "tblc",
    ax_role::ROW => "row",
    ax_role::COLUMN => "col",
    ax_role::OUTLINE => "otl",

    ax_role::IMAGE => "img",
    ax_role::GROUP => "grp",
    ax_role::SPLIT_GROUP => "splt",
    ax_role::TAB_GROUP => "ptl",
    ax_role::TOOLBAR => "tbar",
    ax_role::SCROLL_AREA => "scpn",
    ax_role::SCROLL_BAR => "scbr",
    ax_role::PROGRESS_INDICATOR => "pbar",

    _ => UNKNOWN_ROLE,
  }
}

/// Window-like roles keep punctuation in their labels; everything else has
/// it stripped during derivation. Prefix match, so host-specific variants
/// still classify.
pub(crate) fn is_window_role(raw: &str) -> bool {
  raw.starts_with(ax_role::WINDOW)
}

/// Checkbox-like roles prefer help text as their label source: some hosts
/// set neither title nor value on checkboxes.
pub(crate) fn is_checkbox_role(raw: &str) -> bool {
  raw.starts_with(ax_role::CHECK_BOX)
}
