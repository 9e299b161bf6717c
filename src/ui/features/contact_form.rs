//! Contact form wired to the submission state machine

use leptos::ev::SubmitEvent;
use leptos::logging::{error, log};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::content::CONTACT_CHANNELS;
use crate::core::{
    ContactField, ContactForm as FormState, Interest, Liveness, SimulatedGateway, SubmissionPhase,
    run_submission,
};
use crate::ui::common::{
    Button, ButtonSize, ButtonVariant, Card, CardContent, CardHeader, CheckboxField, ErrorBanner,
    FormField, SelectField, TextAreaField,
};
use crate::ui::icon::{Icon, icons};

#[component]
pub fn ContactForm() -> impl IntoView {
    let form = RwSignal::new(FormState::new());

    // Completions arriving after unmount are dropped
    let liveness = Liveness::new();
    {
        let liveness = liveness.clone();
        on_cleanup(move || liveness.revoke());
    }

    let submit = Callback::new(move |_: ()| {
        let request = match form.try_update(|f| f.begin_submit()) {
            Some(Ok(request)) => request,
            Some(Err(rejected)) => {
                log!("Contact form not sent: {}", rejected);
                return;
            }
            None => return,
        };

        let liveness = liveness.clone();
        spawn_local(async move {
            let gateway = SimulatedGateway::default();
            if let Some(outcome) = run_submission(&gateway, &request, &liveness).await {
                if let Err(e) = &outcome {
                    error!("Contact submission failed: {}", e);
                }
                form.try_update(|f| f.finish_submit(outcome));
            }
        });
    });

    let is_submitted = Memo::new(move |_| form.with(|f| f.phase() == SubmissionPhase::Submitted));

    view! {
        <Show
            when=move || is_submitted.get()
            fallback=move || view! { <ContactFormFields form=form submit=submit /> }
        >
            <Card class="max-w-md mx-auto".to_string()>
                <CardContent>
                    <div class="text-center py-12">
                        <Icon name=icons::CHECK_CIRCLE class="w-16 h-16 text-green-500 mx-auto mb-4 animate-pop" />
                        <h3 class="text-xl font-semibold text-gray-900 mb-2">"Thank you for your message!"</h3>
                        <p class="text-gray-600 mb-6">"We'll get back to you within 24 hours."</p>
                        <Button
                            variant=ButtonVariant::Outline
                            on_click=Callback::new(move |_| form.update(FormState::reset))
                        >
                            "Send Another Message"
                        </Button>
                    </div>
                </CardContent>
            </Card>
        </Show>
    }
}

#[component]
fn ContactFormFields(form: RwSignal<FormState>, submit: Callback<()>) -> impl IntoView {
    let value = move |field: ContactField| Signal::derive(move || form.with(|f| f.fields().get(field)));
    let error = move |field: ContactField| Signal::derive(move || form.with(|f| f.errors().message(field)));
    let on_input = move |field: ContactField| {
        Callback::new(move |v: String| form.update(|f| f.set_field(field, v)))
    };

    let is_submitting = Signal::derive(move || form.with(FormState::is_submitting));
    let failure = Signal::derive(move || {
        form.with(|f| {
            f.failure().map(|e| {
                format!("We couldn't send your message ({}). Your details are still here.", e)
            })
        })
    });

    let interest_options = Interest::ALL
        .iter()
        .map(|interest| (interest.as_str(), interest.label()))
        .collect::<Vec<_>>();

    view! {
        <Card class="max-w-2xl mx-auto".to_string()>
            <CardHeader
                title="Get in Touch".to_string()
                description="Ready to transform your marketing? Let's talk about how ADmyBRAND can help your business grow.".to_string()
            />
            <CardContent>
                <form
                    class="space-y-6"
                    on:submit=move |ev: SubmitEvent| {
                        ev.prevent_default();
                        submit.run(());
                    }
                >
                    <ErrorBanner
                        error=failure
                        on_retry=submit
                        on_dismiss=Callback::new(move |_| form.update(FormState::dismiss_failure))
                    />

                    <div class="grid md:grid-cols-2 gap-4">
                        <FormField
                            id="name"
                            label="Full Name"
                            required=true
                            placeholder="John Doe"
                            value=value(ContactField::Name)
                            on_input=on_input(ContactField::Name)
                            error=error(ContactField::Name)
                            disabled=is_submitting
                        />
                        <FormField
                            id="email"
                            label="Email Address"
                            required=true
                            input_type="email"
                            placeholder="john@company.com"
                            value=value(ContactField::Email)
                            on_input=on_input(ContactField::Email)
                            error=error(ContactField::Email)
                            disabled=is_submitting
                        />
                    </div>

                    <div class="grid md:grid-cols-2 gap-4">
                        <FormField
                            id="company"
                            label="Company Name"
                            required=true
                            placeholder="Your Company"
                            value=value(ContactField::Company)
                            on_input=on_input(ContactField::Company)
                            error=error(ContactField::Company)
                            disabled=is_submitting
                        />
                        <FormField
                            id="phone"
                            label="Phone Number"
                            input_type="tel"
                            placeholder="+1 (555) 123-4567"
                            value=value(ContactField::Phone)
                            on_input=on_input(ContactField::Phone)
                            error=error(ContactField::Phone)
                            disabled=is_submitting
                        />
                    </div>

                    <SelectField
                        id="interest"
                        label="What are you interested in?"
                        value=value(ContactField::Interest)
                        on_change=on_input(ContactField::Interest)
                        options=interest_options
                        disabled=is_submitting
                    />

                    <TextAreaField
                        id="message"
                        label="Message"
                        required=true
                        placeholder="Tell us about your marketing challenges and how we can help..."
                        rows=4
                        value=value(ContactField::Message)
                        on_input=on_input(ContactField::Message)
                        error=error(ContactField::Message)
                        disabled=is_submitting
                    />

                    <CheckboxField id="consent" required=true disabled=is_submitting>
                        "I agree to receive communications from ADmyBRAND and understand that I can unsubscribe at any time. View our "
                        <a href="#" class="text-blue-600 hover:underline">"Privacy Policy"</a>
                        "."
                    </CheckboxField>

                    <Button
                        button_type="submit"
                        variant=ButtonVariant::Gradient
                        size=ButtonSize::Large
                        class="w-full".to_string()
                        loading=is_submitting
                    >
                        {move || if is_submitting.get() { "Sending..." } else { "Send Message" }}
                        <Show when=move || !is_submitting.get()>
                            <Icon name=icons::SEND class="ml-2 h-4 w-4" />
                        </Show>
                    </Button>
                </form>

                <div class="mt-8 pt-8 border-t border-gray-200">
                    <div class="grid md:grid-cols-3 gap-4 text-center">
                        {CONTACT_CHANNELS.iter().map(|channel| view! {
                            <div>
                                <h4 class="font-semibold text-gray-900 mb-1">{channel.label}</h4>
                                <p class="text-gray-600">{channel.value}</p>
                            </div>
                        }).collect_view()}
                    </div>
                </div>
            </CardContent>
        </Card>
    }
}
