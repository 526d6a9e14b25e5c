//! Resource controller: the fetch/render/edit/submit/delete cycle for one resource

use crate::{
    client::ResourceClient,
    error::AppError,
    form::{FormBinder, FormMode},
    prompt::Prompt,
    resources::{capitalize, Resource},
    table::{Action, TableRenderer},
};

/// Which record, if any, the form is currently editing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    IdleCreate,
    Editing(i32),
}

pub struct ResourceController<R: Resource, P: Prompt> {
    client: ResourceClient<R>,
    form: FormBinder<R>,
    table: TableRenderer<R>,
    prompt: P,
    state: ControllerState,
}

impl<R: Resource, P: Prompt> ResourceController<R, P> {
    pub fn new(client: ResourceClient<R>, prompt: P) -> Self {
        Self {
            client,
            form: FormBinder::new(),
            table: TableRenderer::new(),
            prompt,
            state: ControllerState::IdleCreate,
        }
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn form(&self) -> &FormBinder<R> {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormBinder<R> {
        &mut self.form
    }

    pub fn table(&self) -> &TableRenderer<R> {
        &self.table
    }

    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    /// Initial page load
    pub async fn load(&mut self) {
        self.relist().await;
    }

    /// Fetch the full list and render it. On failure the previous table stays.
    pub async fn relist(&mut self) -> bool {
        match self.client.list().await {
            Ok(records) => {
                let table = self.table.render(&records);
                tracing::debug!("Rendered {} {}", table.rows.len(), R::LABELS.plural);
                true
            }
            Err(e) => {
                self.fail(&format!("Failed to fetch {}", R::LABELS.plural), &e);
                false
            }
        }
    }

    /// Route a row action
    pub async fn dispatch(&mut self, action: Action) {
        match action {
            Action::Edit(id) => self.edit(id).await,
            Action::Delete(id) => self.delete(id).await,
        }
    }

    /// Submit the form: create in `IdleCreate`, update in `Editing(id)`
    pub async fn submit(&mut self) {
        let noun = capitalize(R::LABELS.noun);
        let payload = match self.form.to_payload() {
            Ok(payload) => payload,
            Err(e) => {
                self.fail(&format!("Failed to save {}", R::LABELS.noun), &e);
                return;
            }
        };

        let (result, done) = match self.state {
            ControllerState::IdleCreate => {
                tracing::info!("Creating {}", R::LABELS.noun);
                (
                    self.client.create(&payload).await.map(|_| ()),
                    R::LABELS.created.to_string(),
                )
            }
            ControllerState::Editing(id) => {
                tracing::info!("Updating {} {}", R::LABELS.noun, id);
                (
                    self.client.update(id, &payload).await.map(|_| ()),
                    format!("{} updated successfully", noun),
                )
            }
        };

        match result {
            Ok(()) => {
                self.prompt.info(&done);
                self.reset();
                self.relist().await;
            }
            Err(e) => self.fail(&format!("Failed to save {}", R::LABELS.noun), &e),
        }
    }

    /// Load a record into the form and switch to update mode
    pub async fn edit(&mut self, id: i32) {
        match self.client.get(id).await {
            Ok(record) => {
                self.form.from_record(&record);
                self.form.set_mode(FormMode::Update);
                self.state = ControllerState::Editing(id);
                tracing::info!("Editing {} {}", R::LABELS.noun, id);
            }
            Err(e) => self.fail(&format!("Failed to fetch {} for editing", R::LABELS.noun), &e),
        }
    }

    /// Delete after confirmation. The edit state is left as it is.
    pub async fn delete(&mut self, id: i32) {
        let question = format!(
            "Are you sure you want to delete {} with ID {}?",
            R::LABELS.delete_noun,
            id
        );
        if !self.prompt.confirm(&question) {
            return;
        }

        tracing::info!("Deleting {} {}", R::LABELS.noun, id);
        match self.client.delete(id).await {
            Ok(()) => {
                self.prompt
                    .info(&format!("{} deleted successfully", capitalize(R::LABELS.delete_noun)));
                self.relist().await;
            }
            Err(e) => self.fail(&format!("Failed to delete {}", R::LABELS.noun), &e),
        }
    }

    /// Abandon the current edit
    pub fn cancel(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.form.reset();
        self.state = ControllerState::IdleCreate;
    }

    fn fail(&self, context: &str, error: &AppError) {
        tracing::error!("{}: {:?}", context, error);
        self.prompt
            .error(&format!("{}: {}", context, error.user_message()));
    }
}
