use contracts::enums::Personality;
use leptos::prelude::*;
use thaw::*;

/// Кнопки выбора стиля и описание текущего
#[component]
#[allow(non_snake_case)]
pub fn PersonalitySelector(
    #[prop(into)] selected: Signal<Personality>,
    #[prop(into)] disabled: Signal<bool>,
    on_select: Callback<Personality>,
) -> impl IntoView {
    view! {
        <div class="personality-selector">
            <h2>"Select AI Personality"</h2>
            <Flex class="personality-buttons" style="gap: 8px;">
                {Personality::all()
                    .into_iter()
                    .map(|personality| {
                        let appearance = Signal::derive(move || {
                            if selected.get() == personality {
                                ButtonAppearance::Primary
                            } else {
                                ButtonAppearance::Secondary
                            }
                        });
                        view! {
                            <Button
                                class="personality-button"
                                appearance=appearance
                                disabled=disabled
                                on_click=move |_| on_select.run(personality)
                            >
                                {personality.display_name()}
                            </Button>
                        }
                    })
                    .collect_view()}
            </Flex>
            <p class="personality-description">{move || selected.get().description()}</p>
        </div>
    }
}
