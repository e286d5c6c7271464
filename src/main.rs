slint::include_modules!();

use std::{cell::RefCell, rc::Rc};

use anyhow::Result;
use button_builder::{Command, Edit, Editor, FieldSet, Kind};
use clap::Parser;
use slint::{ComponentHandle, ModelRc, SharedString, VecModel, Weak};
use tap::Pipe;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[clap(author, version)]
struct Cli {
    /// Delimiter-joined button captions
    #[clap(long, default_value = "")]
    texts: String,

    /// Delimiter-joined button URLs and callback identifiers
    #[clap(long, default_value = "")]
    targets: String,

    /// Delimiter-joined button kinds, "url" or "callback"
    #[clap(long, default_value = "")]
    kinds: String,
}

fn vec_to_model_rc<T>(v: Vec<T>) -> ModelRc<T>
where
    T: Clone + 'static,
{
    VecModel::from(v).pipe(Rc::new).pipe(ModelRc::from)
}

fn rows(editor: &Editor) -> ModelRc<RowData> {
    editor
        .iter()
        .map(|record| RowData {
            text: SharedString::from(record.text()),
            target: SharedString::from(record.target()),
            kind_index: match record.kind() {
                Kind::Url => 0,
                Kind::Callback => 1,
            },
        })
        .collect::<Vec<_>>()
        .pipe(vec_to_model_rc)
}

fn sync_fields(ui: &AppWindow, fields: &FieldSet) {
    ui.set_texts_field(SharedString::from(fields.texts.as_str()));
    ui.set_targets_field(SharedString::from(fields.targets.as_str()));
    ui.set_kinds_field(SharedString::from(fields.kinds.as_str()));
}

/// Funnel one command through the editor, then push the recommitted fields
/// back into the window. Structural commands also rebuild the row model;
/// in-place edits leave it alone so the line edit being typed in keeps its
/// focus and cursor.
fn dispatch(
    ui_handle: &Weak<AppWindow>,
    editor: &Rc<RefCell<Editor>>,
    command: Command,
    structural: bool,
) {
    let ui = ui_handle.unwrap();
    let mut editor = editor.borrow_mut();

    match editor.apply(command) {
        Ok(fields) => {
            if structural {
                ui.set_rows(rows(&editor));
            }
            sync_fields(&ui, &fields);
        }
        Err(err) => tracing::error!("{err}"),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let Cli {
        texts,
        targets,
        kinds,
    } = Cli::parse();

    let editor = Editor::load(&FieldSet::new(texts, targets, kinds))
        .pipe(RefCell::new)
        .pipe(Rc::new);

    let ui = AppWindow::new()?;

    ui.set_rows(rows(&editor.borrow()));
    sync_fields(&ui, &editor.borrow().commit());

    ui.on_text_edited({
        let editor = Rc::clone(&editor);
        let ui_handle = ui.as_weak();
        move |index, text| {
            let index = index.try_into().unwrap();
            dispatch(
                &ui_handle,
                &editor,
                Command::row(index, Edit::Text(text.to_string())),
                false,
            );
        }
    });

    ui.on_target_edited({
        let editor = Rc::clone(&editor);
        let ui_handle = ui.as_weak();
        move |index, target| {
            let index = index.try_into().unwrap();
            dispatch(
                &ui_handle,
                &editor,
                Command::row(index, Edit::Target(target.to_string())),
                false,
            );
        }
    });

    ui.on_kind_selected({
        let editor = Rc::clone(&editor);
        let ui_handle = ui.as_weak();
        move |index, kind| {
            let index = index.try_into().unwrap();
            dispatch(
                &ui_handle,
                &editor,
                Command::row(index, Edit::Kind(Kind::parse_or_default(&kind))),
                false,
            );
        }
    });

    ui.on_row_removed({
        let editor = Rc::clone(&editor);
        let ui_handle = ui.as_weak();
        move |index| {
            let index = index.try_into().unwrap();
            dispatch(&ui_handle, &editor, Command::row(index, Edit::Remove), true);
        }
    });

    ui.on_row_added({
        let editor = Rc::clone(&editor);
        let ui_handle = ui.as_weak();
        move || dispatch(&ui_handle, &editor, Command::Add, true)
    });

    ui.run()?;

    // hand the final field values to the surrounding form
    let fields = editor.borrow().commit();
    println!("{}", fields.texts);
    println!("{}", fields.targets);
    println!("{}", fields.kinds);

    Ok(())
}
