//! Component gallery mounted by [`run_app`].
//!
//! The host page may embed a `<script type="application/json"
//! id="tf-ui-config">` element carrying a [`UiConfig`]; a missing element
//! means defaults, a broken one is logged and also falls back to defaults.

use anyhow::{Context as _, anyhow};
use gloo::console;
use gloo::utils::{document, window};
use wasm_bindgen_futures::JsFuture;
use yew::prelude::*;

use crate::components::atoms::{
    Avatar, AvatarFallback, AvatarImage, Badge, Button, Checkbox, Input, Skeleton, Slider,
    Switch, Toggle, Tooltip,
};
use crate::components::atoms::icons::IconAlertCircle;
use crate::components::molecules::{
    Accordion, AccordionContent, AccordionItem, AccordionTrigger, Alert, AlertDescription,
    AlertTitle, Breadcrumb, BreadcrumbItem, BreadcrumbLink, BreadcrumbList, BreadcrumbPage,
    BreadcrumbSeparator, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle,
    DropdownMenu, DropdownMenuContent, DropdownMenuItem, DropdownMenuLabel,
    DropdownMenuRadioGroup, DropdownMenuRadioItem, DropdownMenuSeparator, DropdownMenuShortcut,
    DropdownMenuTrigger, PaginationBar,
};
use crate::components::organisms::{
    AlertDialog, AlertDialogAction, AlertDialogCancel, AlertDialogContent,
    AlertDialogDescription, AlertDialogFooter, AlertDialogHeader, AlertDialogTitle,
    AlertDialogTrigger, Calendar, Carousel, CarouselContent, CarouselItem, CarouselNext,
    CarouselPrevious, Drawer, DrawerClose, DrawerContent, DrawerDescription, DrawerFooter,
    DrawerHeader, DrawerTitle, DrawerTrigger, PaymentsTable,
};
use crate::core::config::UiConfig;
use crate::core::primitives::{AccordionMode, CheckedState};
use crate::core::table::payments::RowAction;
use crate::core::variants::{AlertVariant, BadgeVariant, ButtonSize, ButtonVariant, ToggleVariant};

const CONFIG_ELEMENT_ID: &str = "tf-ui-config";
const SLIDE_COUNT: usize = 5;

fn read_config() -> anyhow::Result<Option<UiConfig>> {
    let Some(element) = document().get_element_by_id(CONFIG_ELEMENT_ID) else {
        return Ok(None);
    };
    let raw = element
        .text_content()
        .ok_or_else(|| anyhow!("#{CONFIG_ELEMENT_ID} has no text content"))?;
    let config = UiConfig::from_json(&raw).with_context(|| format!("#{CONFIG_ELEMENT_ID}"))?;
    Ok(Some(config))
}

/// Write `text` to the system clipboard; a rejected write is logged.
fn copy_to_clipboard(text: String) {
    let promise = window().navigator().clipboard().write_text(&text);
    yew::platform::spawn_local(async move {
        if let Err(err) = JsFuture::from(promise).await {
            console::error!("clipboard write failed", text, err);
        }
    });
}

fn load_config() -> UiConfig {
    match read_config() {
        Ok(config) => config.unwrap_or_default(),
        Err(err) => {
            console::error!("ui configuration ignored", format!("{err:#}"));
            UiConfig::default()
        }
    }
}

#[derive(Properties, PartialEq)]
struct SectionProps {
    title: AttrValue,
    #[prop_or_default]
    children: Children,
}

#[function_component(Section)]
fn section(props: &SectionProps) -> Html {
    html! {
        <section class="space-y-4">
            <h2 class="text-lg font-semibold text-neutral-950 font-inter">{ props.title.clone() }</h2>
            <div class="flex flex-wrap items-start gap-4">
                { for props.children.iter() }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct GalleryProps {
    config: UiConfig,
}

#[function_component(Gallery)]
fn gallery(props: &GalleryProps) -> Html {
    let config = &props.config;
    let page = use_state_eq(|| 0_usize);
    let position = use_state_eq(|| AttrValue::Static("bottom"));
    let last_action = use_state_eq(|| None::<String>);
    let terms = use_state_eq(|| CheckedState::Unchecked);

    let on_row_action = {
        let last_action = last_action.clone();
        Callback::from(move |(action, row_id): (RowAction, String)| {
            if let Some(text) = action.clipboard_text(&row_id) {
                copy_to_clipboard(text.to_string());
            }
            last_action.set(Some(format!("{}: {row_id}", action.label())));
        })
    };

    html! {
        <main class="mx-auto max-w-5xl space-y-10 p-8">
            <Section title="Buttons">
                { for ButtonVariant::all().into_iter().map(|variant| html! {
                    <Button {variant}>{ format!("{variant:?}") }</Button>
                }) }
                <Button size={ButtonSize::Sm} variant={ButtonVariant::Outline}>{ "Small" }</Button>
                <Button disabled={true}>{ "Disabled" }</Button>
            </Section>

            <Section title="Badges">
                <Badge>{ "Badge" }</Badge>
                <Badge variant={BadgeVariant::Secondary}>{ "Secondary" }</Badge>
                <Badge variant={BadgeVariant::Destructive}>{ "Destructive" }</Badge>
                <Badge variant={BadgeVariant::Outline}>{ "Outline" }</Badge>
            </Section>

            <Section title="Alerts">
                <Alert>
                    <IconAlertCircle class="size-4" />
                    <AlertTitle>{ "Heads up!" }</AlertTitle>
                    <AlertDescription>{ "You can add components to your app." }</AlertDescription>
                </Alert>
                <Alert variant={AlertVariant::Destructive}>
                    <IconAlertCircle class="size-4" />
                    <AlertTitle>{ "Error" }</AlertTitle>
                    <AlertDescription>{ "Your session has expired. Please log in again." }</AlertDescription>
                </Alert>
            </Section>

            <Section title="Form controls">
                <div class="flex items-center gap-2">
                    <Checkbox
                        id="terms"
                        checked={Some(*terms)}
                        on_checked_change={Callback::from({
                            let terms = terms.clone();
                            move |next| terms.set(next)
                        })}
                    />
                    <label for="terms" class="text-sm font-medium">{ "Accept terms and conditions" }</label>
                </div>
                <Switch aria_label="Airplane mode" />
                <Toggle aria_label="Toggle bold" variant={ToggleVariant::Ghost}>{ "B" }</Toggle>
                <Input placeholder="Email" r#type="email" class="w-64" />
                <Slider default_value={50.0} class="w-64" aria_label="Volume" />
                <Tooltip content="Add to library" delay_ms={config.tooltip.delay_ms}>
                    <Button variant={ButtonVariant::Outline}>{ "Hover" }</Button>
                </Tooltip>
            </Section>

            <Section title="Avatar and skeleton">
                <Avatar>
                    <AvatarImage src="/avatar.png" alt="@shadcn" />
                    <AvatarFallback delay_ms={600}>{ "CN" }</AvatarFallback>
                </Avatar>
                <div class="flex items-center space-x-4">
                    <Skeleton class="h-12 w-12 rounded-full" />
                    <div class="space-y-2">
                        <Skeleton class="h-4 w-[250px]" />
                        <Skeleton class="h-4 w-[200px]" />
                    </div>
                </div>
            </Section>

            <Section title="Card and breadcrumb">
                <Card class="w-[350px]">
                    <CardHeader>
                        <CardTitle>{ "Create project" }</CardTitle>
                        <CardDescription>{ "Deploy your new project in one click." }</CardDescription>
                    </CardHeader>
                    <CardContent>
                        <Input placeholder="Name of your project" />
                    </CardContent>
                    <CardFooter class="flex justify-between">
                        <Button variant={ButtonVariant::Outline}>{ "Cancel" }</Button>
                        <Button>{ "Deploy" }</Button>
                    </CardFooter>
                </Card>
                <Breadcrumb>
                    <BreadcrumbList>
                        <BreadcrumbItem><BreadcrumbLink href="#">{ "Home" }</BreadcrumbLink></BreadcrumbItem>
                        <BreadcrumbSeparator />
                        <BreadcrumbItem><BreadcrumbLink href="#">{ "Components" }</BreadcrumbLink></BreadcrumbItem>
                        <BreadcrumbSeparator />
                        <BreadcrumbItem><BreadcrumbPage>{ "Breadcrumb" }</BreadcrumbPage></BreadcrumbItem>
                    </BreadcrumbList>
                </Breadcrumb>
            </Section>

            <Section title="Accordion">
                <Accordion mode={AccordionMode::Single { collapsible: true }} class="w-96">
                    <AccordionItem value="item-1">
                        <AccordionTrigger>{ "Is it accessible?" }</AccordionTrigger>
                        <AccordionContent>{ "Yes. It adheres to the WAI-ARIA design pattern." }</AccordionContent>
                    </AccordionItem>
                    <AccordionItem value="item-2">
                        <AccordionTrigger>{ "Is it styled?" }</AccordionTrigger>
                        <AccordionContent>{ "Yes. It comes with default styles." }</AccordionContent>
                    </AccordionItem>
                </Accordion>
            </Section>

            <Section title="Menus and overlays">
                <DropdownMenu>
                    <DropdownMenuTrigger>{ "Open" }</DropdownMenuTrigger>
                    <DropdownMenuContent class="w-56">
                        <DropdownMenuLabel>{ "My Account" }</DropdownMenuLabel>
                        <DropdownMenuSeparator />
                        <DropdownMenuItem>
                            { "Profile" }
                            <DropdownMenuShortcut>{ "⇧⌘P" }</DropdownMenuShortcut>
                        </DropdownMenuItem>
                        <DropdownMenuItem disabled={true}>{ "API" }</DropdownMenuItem>
                        <DropdownMenuSeparator />
                        <DropdownMenuLabel>{ "Panel Position" }</DropdownMenuLabel>
                        <DropdownMenuRadioGroup
                            value={Some((*position).clone())}
                            on_value_change={Callback::from({
                                let position = position.clone();
                                move |next| position.set(next)
                            })}
                        >
                            <DropdownMenuRadioItem value="top">{ "Top" }</DropdownMenuRadioItem>
                            <DropdownMenuRadioItem value="bottom">{ "Bottom" }</DropdownMenuRadioItem>
                            <DropdownMenuRadioItem value="right">{ "Right" }</DropdownMenuRadioItem>
                        </DropdownMenuRadioGroup>
                    </DropdownMenuContent>
                </DropdownMenu>

                <AlertDialog>
                    <AlertDialogTrigger>{ "Show Dialog" }</AlertDialogTrigger>
                    <AlertDialogContent>
                        <AlertDialogHeader>
                            <AlertDialogTitle>{ "Are you absolutely sure?" }</AlertDialogTitle>
                            <AlertDialogDescription>
                                { "This action cannot be undone. This will permanently delete your account." }
                            </AlertDialogDescription>
                        </AlertDialogHeader>
                        <AlertDialogFooter>
                            <AlertDialogCancel>{ "Cancel" }</AlertDialogCancel>
                            <AlertDialogAction>{ "Continue" }</AlertDialogAction>
                        </AlertDialogFooter>
                    </AlertDialogContent>
                </AlertDialog>

                <Drawer>
                    <DrawerTrigger>{ "Open Drawer" }</DrawerTrigger>
                    <DrawerContent>
                        <DrawerHeader>
                            <DrawerTitle>{ "Move Goal" }</DrawerTitle>
                            <DrawerDescription>{ "Set your daily activity goal." }</DrawerDescription>
                        </DrawerHeader>
                        <DrawerFooter>
                            <Button>{ "Submit" }</Button>
                            <DrawerClose>{ "Cancel" }</DrawerClose>
                        </DrawerFooter>
                    </DrawerContent>
                </Drawer>
            </Section>

            <Section title="Carousel">
                <Carousel options={config.carousel.clone()} class="mx-12 w-full max-w-xs">
                    <CarouselContent>
                        { for (1..=SLIDE_COUNT).map(|slide| html! {
                            <CarouselItem key={slide}>
                                <Card>
                                    <CardContent class="flex aspect-square items-center justify-center p-6">
                                        <span class="text-4xl font-semibold">{ slide.to_string() }</span>
                                    </CardContent>
                                </Card>
                            </CarouselItem>
                        }) }
                    </CarouselContent>
                    <CarouselPrevious />
                    <CarouselNext />
                </Carousel>
            </Section>

            <Section title="Calendar and pagination">
                <Calendar />
                <PaginationBar
                    current={*page}
                    total={10}
                    on_page_change={Callback::from({
                        let page = page.clone();
                        move |next| page.set(next)
                    })}
                />
            </Section>

            <Section title="Data table">
                <PaymentsTable
                    page_size={config.table.page_size}
                    next_page_policy={config.table.next_page_policy}
                    {on_row_action}
                />
                if let Some(action) = (*last_action).clone() {
                    <p class="text-sm text-neutral-500">{ action }</p>
                }
            </Section>
        </main>
    }
}

#[function_component(TfUiApp)]
fn tf_ui_app() -> Html {
    let config = use_memo(|_| load_config(), ());
    html! { <Gallery config={(*config).clone()} /> }
}

/// Entry point for the wasm application.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = document().get_element_by_id("root") {
        yew::Renderer::<TfUiApp>::with_root(root).render();
    } else {
        yew::Renderer::<TfUiApp>::new().render();
    }
}
