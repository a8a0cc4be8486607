use a11y_widget_core::controls::button_style;
use a11y_widget_core::{CONTROLS_CLASS, ControlAction, Icons, Position, WidgetConfig};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub icons: Icons,
    pub button_size: AttrValue,
    pub position: Position,
    #[prop_or_default]
    pub on_action: Callback<ControlAction>,
}

impl Props {
    #[must_use]
    pub fn from_config(config: &WidgetConfig, on_action: Callback<ControlAction>) -> Self {
        Self {
            icons: config.icons.clone(),
            button_size: AttrValue::from(config.button_size.clone()),
            position: config.position,
            on_action,
        }
    }
}

/// Floating toolbar with the decrease, increase and contrast buttons.
#[function_component(A11yControls)]
pub fn a11y_controls(p: &Props) -> Html {
    let size_style = AttrValue::from(button_style(&p.button_size));
    let buttons = ControlAction::ALL
        .into_iter()
        .map(|action| {
            let onclick = {
                let cb = p.on_action.clone();
                Callback::from(move |_: MouseEvent| cb.emit(action))
            };
            let label = action.label();
            let glyph = action.glyph(&p.icons).to_string();
            html! {
                <button
                    type="button"
                    data-action={action.token()}
                    title={label}
                    aria-label={label}
                    style={size_style.clone()}
                    {onclick}
                >{ glyph }</button>
            }
        })
        .collect::<Html>();

    html! {
        <div
            class={CONTROLS_CLASS}
            role="toolbar"
            aria-label="Accessibility controls"
            style={p.position.inline_style()}
        >
            { buttons }
        </div>
    }
}
