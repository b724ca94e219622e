//! Element locators of the remote lesson editor
//!
//! Kept in one place so a change of the remote markup touches only this
//! file.

use crate::use_cases::verified_choice::Choice;
use lessonsmith_domain::{JumpTarget, PageNaming};

// Course page
pub(crate) const ADD_SECTIONS: &str = "a.add-sections";
pub(crate) const MODAL_CONFIRM: &str = "div.modal-footer > button";
pub(crate) const SECTION_ITEM: &str = "li.section";
pub(crate) const SECTION_NAME: &str = ".sectionname";
pub(crate) const ACTIVITY_ITEM: &str = "li.activity";
pub(crate) const ACTIVITY_NAME: &str = ".instancename";
pub(crate) const QUICK_EDIT: &str = "a.quickeditlink";
pub(crate) const ADD_ACTIVITY: &str = "div:nth-child(4) > div:nth-child(5) > div:nth-child(1) > div:nth-child(1) > span:nth-child(1) > a:nth-child(1) > span:nth-child(2)";
pub(crate) const LESSON_ITEM: &str = "item_lesson";
pub(crate) const CHOOSER_SUBMIT: &str = "input.submitbutton";
pub(crate) const MORE_LESS_TOGGLE: &str = ".moreless-toggler";

// Module settings form
pub(crate) const MODULE_NAME: &str = "id_name";
pub(crate) const MODULE_SAVE: &str = "id_submitbutton2";
/// (select id, option index): review allowed, unlimited attempts,
/// retakes allowed, highest grade, completion tracked on view
pub(crate) const MODULE_OPTIONS: [(&str, usize); 5] = [
    ("id_modattempts", 1),
    ("id_maxattempts", 0),
    ("id_retake", 1),
    ("id_usemaxgrade", 1),
    ("id_completion", 2),
];

// Lesson edit page
pub(crate) const FIRST_PAGE_LINK: &str = ".box.py-3.generalbox.firstpageoptions > p:nth-child(4) > a";
pub(crate) const PAGE_ACTION_SELECT: &str = ".custom-select.singleselect";
pub(crate) const ADD_END_OF_CLUSTER: usize = 1;
pub(crate) const ADD_CONTENT_PAGE: usize = 4;
pub(crate) const ADD_QUESTION_PAGE: usize = 5;

// Page forms
pub(crate) const COLLAPSE_EXPAND: &str = "collapseexpand";
pub(crate) const ALL_EXPANDED: &str = "collapse-all";
pub(crate) const PAGE_TITLE: &str = "id_title";
pub(crate) const PAGE_CONTENTS: &str = "id_contents_editoreditable";
pub(crate) const PAGE_SUBMIT: &str = "id_submitbutton";

// Image upload dialog
pub(crate) const IMAGE_BUTTON: &str = ".atto_image_button";
pub(crate) const OPEN_BROWSER: &str = "button.openimagebrowser";
pub(crate) const UPLOAD_REPOSITORY: &str = ".fp-repo-area > div:nth-child(4)";
pub(crate) const UPLOAD_FILE: &str = "repo_upload_file";
pub(crate) const UPLOAD_BUTTON: &str = ".fp-upload-btn";
pub(crate) const OVERWRITE_BUTTON: &str = ".file-picker.fp-dlg > div > button";
pub(crate) const IMAGE_ALT: &str = "id_contents_editor_atto_image_altentry";
pub(crate) const IMAGE_WIDTH: &str = "id_contents_editor_atto_image_widthentry";
pub(crate) const IMAGE_HEIGHT: &str = "id_contents_editor_atto_image_heightentry";
pub(crate) const IMAGE_SAVE: &str = ".atto_image_urlentrysubmit";

// Question answers
pub(crate) const EDITOR_TOOLBAR: &str = ".editor_atto_toolbar";
pub(crate) const TOOLBAR_EXPAND: &str = "atto_collapse_button";
pub(crate) const TOOLBAR_HTML: &str = "atto_html_button";

/// Plain text field of navigation button `slot`
pub(crate) fn button_label(slot: usize) -> String {
    format!("id_answer_editor_{}", slot)
}

/// Rich text field of answer `slot`
pub(crate) fn answer_editor(slot: usize) -> String {
    format!("id_answer_editor_{}editable", slot)
}

pub(crate) fn response_editor(slot: usize) -> String {
    format!("id_response_editor_{}editable", slot)
}

pub(crate) fn jump_select(slot: usize) -> String {
    format!("id_jumpto_{}", slot)
}

/// Option of a jump select for `target`
///
/// Built-in targets sit at fixed positions; page targets are chosen by
/// their display label.
pub(crate) fn jump_choice(target: &JumpTarget, naming: &PageNaming) -> Choice {
    match target {
        JumpTarget::NextPage => Choice::Index(1),
        JumpTarget::PreviousPage => Choice::Index(2),
        JumpTarget::EndOfLesson => Choice::Index(3),
        JumpTarget::RandomContent => Choice::Index(6),
        JumpTarget::Slide(ordinal) => Choice::VisibleText(naming.slide_title(*ordinal)),
        JumpTarget::Video(position) => Choice::VisibleText(naming.video_title(*position)),
    }
}
